pub mod check;
pub mod password_gen;
pub mod strengthen;

use rpawocheck::prohibited::ProhibitedSet;
use rpawocheck::scoring::{self, StrengthReport};

pub(crate) fn display_strength(password: &str, prohibited: &ProhibitedSet) {
    if let StrengthReport::Scored { score, label, .. } =
        scoring::assess_password(password, prohibited)
    {
        println!("Password strength: {} (score: {:.2}/10)", label, score);
    }
}
