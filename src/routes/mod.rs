pub mod agenda;
pub mod landing;
pub mod timetable;
