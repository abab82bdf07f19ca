use chrono::{DateTime, TimeZone, Utc};
use serenity::all::MessageId;
use test_utils::factory::war::WarFactory;

use crate::{
    error::{coc::CocError, AppError},
    model::{
        notifier::{AlertKind, NotifierState, PingFlags},
        war::WarState,
    },
    service::{
        test::{FakeChannel, FakeClashApi, FakeMessage},
        war_status::{alert::due_alert, builder::*, WarStatusService},
    },
};

mod reconcile;
mod tick;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 16, 18, 0, 0).unwrap()
}
