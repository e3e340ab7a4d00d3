pub mod init;

pub use init::init;
