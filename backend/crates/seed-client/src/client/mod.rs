pub(crate) mod firebase_client;
pub(crate) mod firestore;
pub(crate) mod identity;

pub use firebase_client::FirebaseClient;
