pub mod frames;
pub mod games;

pub use frames::Entity as Frames;
pub use frames::Model as FrameRow;
pub use games::Entity as Games;
pub use games::Model as Game;
