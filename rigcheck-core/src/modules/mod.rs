pub mod bottleneck;
pub mod builtin;
pub mod catalog;
pub mod compatibility;
pub mod fps;
pub mod pairing;
pub mod recommend;
pub mod resolve;
pub mod score;
