use serde::{Deserialize, Serialize};

/// Common chord progressions, expressed as 0-based scale degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Progression {
    #[serde(rename = "I-IV-V")]
    OneFourFive,
    #[serde(rename = "I-vi-ii-V")]
    OneSixTwoFive,
    #[serde(rename = "ii-V-I")]
    TwoFiveOne,
}

impl Progression {
    pub const ALL: [Progression; 3] = [
        Progression::OneFourFive,
        Progression::OneSixTwoFive,
        Progression::TwoFiveOne,
    ];

    pub fn degrees(self) -> &'static [usize] {
        match self {
            Progression::OneFourFive => &[0, 3, 4],
            Progression::OneSixTwoFive => &[0, 5, 2, 4],
            Progression::TwoFiveOne => &[2, 4, 0],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Progression::OneFourFive => "I-IV-V",
            Progression::OneSixTwoFive => "I-vi-ii-V",
            Progression::TwoFiveOne => "ii-V-I",
        }
    }
}
