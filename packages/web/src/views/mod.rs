mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod profile;
pub use profile::{Home, Profile};

mod search;
pub use search::Search;

mod placeholders;
pub use placeholders::{Chats, Matches};
