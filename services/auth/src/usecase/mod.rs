pub mod hasher;
pub mod otp;
pub mod provision;
pub mod register;
pub mod resolve;
pub mod token;
