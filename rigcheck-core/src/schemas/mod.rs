pub mod computing;
pub mod fps;
pub mod report;
