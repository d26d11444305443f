mod alert;
mod button;
mod score_bar;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use score_bar::ScoreBar;
pub(crate) use spinner::Spinner;
