use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DESTINATION_EXTENSION, DESTINATION_SEPARATOR, prelude::*};

/// Name of the static page a selected date leads to, e.g. `02_02.html`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[display(fmt = "{_0}")]
#[serde(transparent)]
pub struct Destination(String);

impl Destination {
    /// Month and day as two-digit zero-padded numbers, `MM_DD.html`.
    /// The year does not take part.
    pub fn for_date(date: CalendarDate) -> Self {
        Self(format!(
            "{:02}{DESTINATION_SEPARATOR}{:02}.{DESTINATION_EXTENSION}",
            date.month(),
            date.day()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The page name without its extension, `MM_DD`.
    pub fn stem(&self) -> &str {
        self.0
            .strip_suffix(DESTINATION_EXTENSION)
            .and_then(|s| s.strip_suffix('.'))
            .unwrap_or(&self.0)
    }
}

impl AsRef<str> for Destination {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Receives the destination of a selected date.
pub trait Navigator {
    fn navigate(&mut self, destination: &Destination);
}

impl<F> Navigator for F
where
    F: FnMut(&Destination),
{
    fn navigate(&mut self, destination: &Destination) {
        self(destination);
    }
}
