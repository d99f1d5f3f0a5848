//! Frontend Models
//!
//! Course days and the lesson notes bundled with each.

/// One day of the workshop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Day {
    #[default]
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Day {
    pub const ALL: [Day; 5] = [Day::One, Day::Two, Day::Three, Day::Four, Day::Five];

    pub fn number(self) -> u8 {
        match self {
            Day::One => 1,
            Day::Two => 2,
            Day::Three => 3,
            Day::Four => 4,
            Day::Five => 5,
        }
    }

    pub fn from_number(number: u8) -> Option<Day> {
        Day::ALL.into_iter().find(|day| day.number() == number)
    }

    pub fn label(self) -> String {
        format!("Day {}", self.number())
    }

    pub fn topic(self) -> &'static str {
        match self {
            Day::One => "State and event handlers",
            Day::Two => "Typed props and reusable state",
            Day::Three => "Interactive star rating",
            Day::Four => "Component composition",
            Day::Five => "Todo list with list state",
        }
    }

    /// Markdown lesson notes, including the manual testing checklist
    pub fn notes(self) -> &'static str {
        match self {
            Day::One => include_str!("../lessons/day1.md"),
            Day::Two => include_str!("../lessons/day2.md"),
            Day::Three => include_str!("../lessons/day3.md"),
            Day::Four => include_str!("../lessons/day4.md"),
            Day::Five => include_str!("../lessons/day5.md"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_numbers_round_trip() {
        for day in Day::ALL {
            assert_eq!(Day::from_number(day.number()), Some(day));
        }
        assert_eq!(Day::from_number(0), None);
        assert_eq!(Day::from_number(6), None);
        assert_eq!(Day::Three.label(), "Day 3");
    }

    #[test]
    fn test_every_day_has_a_checklist() {
        for day in Day::ALL {
            assert!(day.notes().contains("## Testing checklist"), "{:?}", day);
            assert!(day.notes().contains("- [ ]"), "{:?}", day);
        }
    }
}
