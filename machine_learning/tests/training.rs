use machine_learning::{
    Frame, Label, Perceptron, Presenter, RandomSource, RngSource, ScriptedSource, ShapeSampling,
    StepResult, TrainingLoop, display::normalize,
};

const SIDE: usize = 20;
const STEPS: usize = 500;

fn run<S: RandomSource>(training: &mut TrainingLoop<S>, steps: usize) -> Vec<Option<StepResult>> {
    (0..steps).map(|_| training.step()).collect()
}

#[test]
fn seeded_runs_are_identical() {
    let mut a = TrainingLoop::new(SIDE, ShapeSampling::default(), RngSource::seeded(2024));
    let mut b = TrainingLoop::new(SIDE, ShapeSampling::default(), RngSource::seeded(2024));

    let xs = run(&mut a, STEPS);
    let ys = run(&mut b, STEPS);

    assert_eq!(xs, ys);
    assert_eq!(a.weights(), b.weights());
}

#[test]
fn scripted_runs_are_identical() {
    let draws = [0.9, 0.1, 0.7, 0.3, 0.5, 0.2, 0.8, 0.05, 0.6, 0.4, 0.95];

    let mut a = TrainingLoop::new(SIDE, ShapeSampling::default(), ScriptedSource::new(draws));
    let mut b = TrainingLoop::new(SIDE, ShapeSampling::default(), ScriptedSource::new(draws));

    assert_eq!(run(&mut a, 100), run(&mut b, 100));
    assert_eq!(a.weights(), b.weights());
}

#[test]
fn different_seeds_diverge() {
    let mut a = TrainingLoop::new(SIDE, ShapeSampling::default(), RngSource::seeded(1));
    let mut b = TrainingLoop::new(SIDE, ShapeSampling::default(), RngSource::seeded(2));

    assert_ne!(run(&mut a, 50), run(&mut b, 50));
}

#[test]
fn metrics_agree_with_results() {
    let mut training = TrainingLoop::new(SIDE, ShapeSampling::default(), RngSource::seeded(7));
    let results = run(&mut training, STEPS);

    let completed: Vec<_> = results.iter().flatten().collect();
    let skipped = results.len() - completed.len();
    let updates = completed.iter().filter(|r| r.updated).count();

    let metrics = training.metrics();
    assert_eq!(metrics.ticks, STEPS as u64);
    assert_eq!(metrics.skipped, skipped as u64);
    assert_eq!(metrics.trained, completed.len() as u64);
    assert_eq!(metrics.mistakes, updates as u64);

    // Shapes near the far edges overflow the default sampling ranges.
    assert!(skipped > 0);
    assert!(!completed.is_empty());
}

#[test]
fn results_are_consistent() {
    let mut training = TrainingLoop::new(SIDE, ShapeSampling::default(), RngSource::seeded(99));

    for (i, result) in run(&mut training, STEPS).into_iter().enumerate() {
        let Some(result) = result else {
            continue;
        };

        assert_eq!(result.step, i as u64);
        assert_eq!(result.label, result.shape.label());
        assert_eq!(result.predicted, Label::from_prediction(result.prediction));
        assert_eq!(result.updated, result.predicted != result.label);
        assert!(result.shape.fits(SIDE));
    }
}

#[test]
fn weights_move_in_unit_steps() {
    let mut source = RngSource::seeded(5);
    let initial = Perceptron::new(SIDE, &mut source);
    let before = initial.weights().to_owned();

    let mut training = TrainingLoop::with_perceptron(initial, ShapeSampling::default(), source);
    run(&mut training, STEPS);

    for (w, w0) in training.weights().iter().zip(before.iter()) {
        let delta = w - w0;
        assert!((delta - delta.round()).abs() < 1e-3, "{w} - {w0}");
    }
}

#[test]
fn skipped_steps_do_not_touch_the_weights() {
    // Every sample is a 5x5 square at (16, 16).
    let source = ScriptedSource::new([0.1, 0.99, 0.99, 0.99, 0.99]);
    let perceptron = Perceptron::from_weights(SIDE, vec![0.5; SIDE * SIDE]).unwrap();
    let mut training = TrainingLoop::with_perceptron(perceptron, ShapeSampling::default(), source);

    assert!(run(&mut training, 20).iter().all(Option::is_none));
    assert!(training.weights().iter().all(|&w| w == 0.5));
    assert_eq!(training.metrics().skipped, 20);
}

struct Intensities {
    frames: usize,
    last: Vec<f32>,
}

impl Presenter for Intensities {
    fn present(&mut self, frame: Frame<'_>) {
        self.frames += 1;
        self.last = normalize(frame.weights).to_vec();
    }
}

#[test]
fn presenter_sees_every_completed_step() {
    let mut training = TrainingLoop::new(SIDE, ShapeSampling::default(), RngSource::seeded(8));
    let mut presenter = Intensities {
        frames: 0,
        last: Vec::new(),
    };

    let completed = (0..100)
        .filter_map(|_| training.tick(&mut presenter))
        .count();

    assert_eq!(presenter.frames, completed);
    assert_eq!(presenter.last.len(), SIDE * SIDE);
    assert!(presenter.last.iter().all(|x| (0.0..=255.0).contains(x)));
}
