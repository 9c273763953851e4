use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum MatchMode {
    /// Human plays X against the computer playing O
    #[serde(rename = "pvc", alias = "player_vs_computer")]
    #[value(name = "pvc")]
    PlayerVsComputer,
    /// The computer plays both sides
    #[serde(rename = "cvc", alias = "computer_vs_computer")]
    #[value(name = "cvc")]
    ComputerVsComputer,
}

impl MatchMode {
    pub fn from_menu_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(MatchMode::PlayerVsComputer),
            2 => Some(MatchMode::ComputerVsComputer),
            _ => None,
        }
    }
}
