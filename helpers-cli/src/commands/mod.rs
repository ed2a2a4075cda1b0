mod decrypt;
mod ecb;
mod encrypt;
mod hmac;
mod now;
mod random;
mod verify;

pub use self::decrypt::DecryptCommand;
pub use self::ecb::EcbCommand;
pub use self::encrypt::EncryptCommand;
pub use self::hmac::HmacCommand;
pub use self::now::NowCommand;
pub use self::random::RandomCommand;
pub use self::verify::VerifyCommand;
