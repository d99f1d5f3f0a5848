//! UI Components
//!
//! Reusable Leptos components.

mod button;
mod card;
mod card_demo;
mod counter;
mod day_tab_bar;
mod lesson_notes;
mod log_panel;
mod star_rating;
mod todo_input;
mod todo_item;
mod todo_list;

pub use button::Button;
pub use card::{Card, CardAction, CardBody, CardFooter, CardHeader, CardWithActions};
pub use card_demo::CardDemo;
pub use counter::{CounterDemo, CounterDisplay};
pub use day_tab_bar::DayTabBar;
pub use lesson_notes::LessonNotes;
pub use log_panel::LogPanel;
pub use star_rating::{RatingDisplay, StarRating, StarsRow};
pub use todo_input::TodoInput;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
