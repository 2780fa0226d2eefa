pub mod clue_index;
pub mod command;
pub mod console;
pub mod explorer;
pub mod layout;
pub mod level;
pub mod mock_console;
pub mod room;
pub mod session;
pub mod suspect_map;
pub mod text;
pub mod verdict;

pub use clue_index::ClueIndex;
pub use level::Level;
pub use room::{Room, RoomGraph};
pub use session::{Session, SessionReport};
pub use suspect_map::SuspectMap;
