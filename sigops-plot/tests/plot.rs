use sigops_core::{DemoKind, TransformStore};
use sigops_plot::layout::{amplitude_ticks, sample_curve, time_ticks};
use sigops_plot::{ContainerSize, PlotInput, PlotStyle, ResizeNotifier, SignalPlot, Viewport};
use std::cell::RefCell;
use std::rc::Rc;

const WHITE: [u8; 3] = [0xff, 0xff, 0xff];

fn near(pixel: Option<[u8; 3]>, expected: [u8; 3]) -> bool {
    match pixel {
        Some(p) => p
            .iter()
            .zip(expected.iter())
            .all(|(a, b)| (*a as i16 - *b as i16).abs() <= 12),
        None => false,
    }
}

fn transformed_rgb() -> [u8; 3] {
    let c = PlotStyle::default().transformed;
    [c.0, c.1, c.2]
}

fn input_for(store: &TransformStore) -> PlotInput {
    PlotInput {
        original: store.original().clone(),
        transformed: store.transformed().clone(),
        show_original: store.show_original(),
    }
}

fn silenced_amplitude() -> TransformStore {
    let mut store = TransformStore::new(DemoKind::AmplitudeScaling);
    store.set_parameter("amplitude", 0.0).expect("set amplitude");
    store
}

#[test]
fn zero_amplitude_draws_on_the_time_axis() {
    let store = silenced_amplitude();
    let mut plot = SignalPlot::new(800, 1.0);
    assert!(plot.update(&input_for(&store)).expect("draw"));

    let surface = plot.surface();
    assert_eq!(surface.physical_size(), (800, 300));
    assert!(near(surface.pixel(100, 150), transformed_rgb()));
    assert_eq!(surface.pixel(20, 15), Some(WHITE));
    assert_ne!(surface.pixel(40, 15), Some(WHITE));
}

#[test]
fn high_density_display_doubles_the_buffer() {
    let store = silenced_amplitude();
    let mut plot = SignalPlot::new(800, 2.0);
    plot.update(&input_for(&store)).expect("draw");

    let surface = plot.surface();
    assert_eq!(surface.physical_size(), (1600, 600));
    assert!(near(surface.pixel(200, 300), transformed_rgb()));
    assert_eq!(surface.pixel(40, 30), Some(WHITE));
}

#[test]
fn identical_inputs_render_identical_pixels() {
    let store = TransformStore::new(DemoKind::TimeShift);
    let mut a = SignalPlot::new(640, 1.0);
    let mut b = SignalPlot::new(640, 1.0);
    a.update(&input_for(&store)).expect("draw");
    b.update(&input_for(&store)).expect("draw");
    assert_eq!(a.surface().pixels(), b.surface().pixels());
}

#[test]
fn hiding_the_original_changes_the_frame() {
    let store = silenced_amplitude();
    let mut input = input_for(&store);
    let mut shown = SignalPlot::new(640, 1.0);
    shown.update(&input).expect("draw");

    input.show_original = false;
    let mut hidden = SignalPlot::new(640, 1.0);
    hidden.update(&input).expect("draw");

    assert_ne!(shown.surface().pixels(), hidden.surface().pixels());
    assert_eq!(hidden.legend().len(), 1);
    assert_eq!(shown.legend().len(), 2);
}

#[test]
fn redraws_only_on_identity_or_flag_change() {
    let mut store = TransformStore::new(DemoKind::TimeShift);
    let mut plot = SignalPlot::new(800, 1.0);
    assert!(plot.update(&input_for(&store)).expect("draw"));
    assert!(!plot.update(&input_for(&store)).expect("draw"));
    assert_eq!(plot.redraw_count(), 1);

    store.set_parameter("shift", 1.5).expect("set shift");
    assert!(plot.update(&input_for(&store)).expect("draw"));

    // Same value again keeps the function identity.
    assert_eq!(store.set_parameter("shift", 1.5), Ok(false));
    assert!(!plot.update(&input_for(&store)).expect("draw"));

    let mut input = input_for(&store);
    input.show_original = false;
    assert!(plot.update(&input).expect("draw"));
    assert_eq!(plot.redraw_count(), 3);
}

#[test]
fn resize_redraws_at_new_size() {
    let store = silenced_amplitude();
    let mut plot = SignalPlot::new(800, 1.0);
    plot.update(&input_for(&store)).expect("draw");

    assert!(plot.resize(400, 1.0).expect("resize"));
    assert_eq!(plot.redraw_count(), 2);
    assert_eq!(plot.surface().physical_size(), (400, 200));
    assert!(near(plot.surface().pixel(50, 100), transformed_rgb()));

    assert!(!plot.resize(400, 1.0).expect("resize"));
    assert_eq!(plot.redraw_count(), 2);
}

#[test]
fn resize_before_first_draw_only_sizes() {
    let mut plot = SignalPlot::new(800, 1.0);
    assert!(!plot.resize(500, 1.0).expect("resize"));
    assert_eq!(plot.redraw_count(), 0);
    assert_eq!(plot.surface().physical_size(), (500, 200));
}

#[test]
fn notifier_drives_mounted_plot_until_unmounted() {
    let store = silenced_amplitude();
    let notifier = ResizeNotifier::new();
    let plot = Rc::new(RefCell::new(SignalPlot::new(800, 1.0)));
    plot.borrow_mut().update(&input_for(&store)).expect("draw");

    let target = Rc::downgrade(&plot);
    let subscription = notifier.subscribe(move |size: ContainerSize| {
        if let Some(plot) = target.upgrade() {
            plot.borrow_mut()
                .resize(size.width, size.scale)
                .expect("resize");
        }
    });

    notifier.notify(ContainerSize::new(400, 1.0));
    assert_eq!(plot.borrow().surface().physical_size(), (400, 200));
    assert_eq!(plot.borrow().redraw_count(), 2);

    drop(subscription);
    assert_eq!(notifier.listener_count(), 0);
    notifier.notify(ContainerSize::new(700, 1.0));
    assert_eq!(plot.borrow().surface().physical_size(), (400, 200));
    assert_eq!(plot.borrow().redraw_count(), 2);
}

#[test]
fn tick_positions_follow_fixed_viewport() {
    let vp = Viewport::for_width(800);
    let xs: Vec<f64> = time_ticks(&vp).iter().map(|t| t.position).collect();
    assert_eq!(xs, vec![0.0, 200.0, 400.0, 600.0, 800.0]);

    let ticks = amplitude_ticks(&vp);
    let ys: Vec<f64> = ticks.iter().map(|t| t.position).collect();
    assert_eq!(ys, vec![0.0, 75.0, 150.0, 225.0, 300.0]);
    let labelled: Vec<f64> = ticks
        .iter()
        .filter(|t| t.label.is_some())
        .map(|t| t.value)
        .collect();
    assert_eq!(labelled, vec![1.0, 0.0, -1.0]);
    assert_eq!(ticks[1].label.as_ref().map(|l| l.at), Some((390.0, 75.0)));
}

#[test]
fn negative_unit_amplitude_mirrors_about_center() {
    let vp = Viewport::for_width(800);
    let mut store = TransformStore::new(DemoKind::AmplitudeScaling);
    let upright = sample_curve(store.transformed(), &vp);
    store.set_parameter("amplitude", -1.0).expect("set amplitude");
    let mirrored = sample_curve(store.transformed(), &vp);

    let cy = vp.center_y();
    for (a, b) in upright.iter().zip(mirrored.iter()) {
        assert_eq!(a.0, b.0);
        assert!(((a.1 - cy) + (b.1 - cy)).abs() < 1e-9);
    }
}
