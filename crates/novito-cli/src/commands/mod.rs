pub mod analytics;
pub mod audit;
pub mod blockers;
pub mod briefing;
pub mod chat;
pub mod dashboard;
pub mod dispatch;
pub mod meetings;
pub mod review;
pub mod session;
pub mod settings;
pub mod shared;
pub mod smart;
pub mod tasks;
pub mod team;
