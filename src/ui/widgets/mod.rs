pub mod fitness_chart;
pub mod manifest_slider;
pub mod sequence_view;

pub use fitness_chart::FitnessChart;
pub use manifest_slider::ManifestSlider;
pub use sequence_view::SequenceView;
