mod tutor_service;

pub use tutor_service::{SpokenReply, TutorError, TutorService};
