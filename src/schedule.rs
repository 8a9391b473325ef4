//! Conference schedule data: reminder entries and the display agenda.
//!
//! Two views of the same conference: [`ScheduleEntry`] carries the exact
//! talk start times the reminder checker works from, while
//! [`AgendaDay`]/[`AgendaEvent`] hold the human-readable programme shown
//! on the Schedule tab. Both are immutable after startup.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single reminder-worthy event: when a talk starts and what to say.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Talk start (local calendar date + time).
    pub starts_at: NaiveDateTime,
    /// Message shown in the notification body.
    pub message: String,
}

impl ScheduleEntry {
    /// Create a new entry.
    pub fn new(starts_at: NaiveDateTime, message: impl Into<String>) -> Self {
        Self {
            starts_at,
            message: message.into(),
        }
    }

    /// The conference talks used when no config file overrides them.
    pub fn conference_defaults() -> Vec<Self> {
        let talk = |y, m, d, h, min, message: &str| {
            let starts_at = NaiveDate::from_ymd_opt(y, m, d)
                .and_then(|date| date.and_hms_opt(h, min, 0))
                .unwrap_or_default();
            Self::new(starts_at, message)
        };

        vec![
            talk(2024, 9, 23, 9, 45, "Lecture by Bishop Pavly starts in 15 minutes"),
            talk(2024, 9, 24, 9, 45, "Lecture by Bishop Mattaous starts in 15 minutes"),
            talk(2024, 9, 24, 10, 45, "Lecture by Bishop Raphael starts in 15 minutes"),
            talk(2024, 9, 24, 13, 45, "Lecture by Bishop Fam starts in 15 minutes"),
        ]
    }
}

/// One timed event on the display agenda.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaEvent {
    /// Display time, e.g. `"10:00"`.
    pub time: String,
    /// Event name.
    pub name: String,
    /// Where to be.
    pub location: String,
}

impl AgendaEvent {
    /// Create a new display event.
    pub fn new(time: impl Into<String>, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            name: name.into(),
            location: location.into(),
        }
    }
}

/// One day of the display agenda.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaDay {
    /// Day heading, e.g. `"Day 1"`.
    pub title: String,
    /// Events in programme order.
    pub events: Vec<AgendaEvent>,
}

impl AgendaDay {
    /// Create a day with its events.
    pub fn new(title: impl Into<String>, events: Vec<AgendaEvent>) -> Self {
        Self {
            title: title.into(),
            events,
        }
    }

    /// The three-day conference programme used when no config file
    /// overrides it.
    pub fn conference_defaults() -> Vec<Self> {
        vec![
            Self::new(
                "Day 1",
                vec![
                    AgendaEvent::new("10:00", "Lecture by Bishop Pavli", "Main Conference Hall"),
                    AgendaEvent::new(
                        "03:30",
                        "Trip to Alexandria",
                        "Gathering Point: Hotel Entrance",
                    ),
                ],
            ),
            Self::new(
                "Day 2",
                vec![
                    AgendaEvent::new("10:00", "Lecture by Bishop Mattaous", "Main Conference Hall"),
                    AgendaEvent::new("02:00", "Lecture by Bishop Raphael", "Main Conference Hall"),
                    AgendaEvent::new("06:00", "Lecture by Bishop Fam", "Main Conference Hall"),
                ],
            ),
            Self::new(
                "Day 3",
                vec![AgendaEvent::new(
                    "08:00",
                    "Trip to Wadi El-Natrun Monasteries",
                    "Gathering Point: Hotel Entrance",
                )],
            ),
        ]
    }
}
