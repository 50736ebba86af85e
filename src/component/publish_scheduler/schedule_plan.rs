//! 發布排程計算與送出

use super::platform::{
    PlatformError, SCHEDULED_PRIVACY_STATUS, UploadPlatform, UploadedVideo, VideoStatus,
    VideoStatusUpdate,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use log::{info, warn};
use std::sync::atomic::{AtomicBool, Ordering};

/// 單支影片的發布時間
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledPublish {
    pub video_id: String,
    pub title: String,
    pub publish_at: DateTime<Utc>,
}

/// 排程送出結果統計
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScheduleResult {
    pub scheduled: usize,
    /// 非致命錯誤而跳過的影片
    pub warnings: usize,
}

/// 分鐘數轉為 `Duration`，超出可表示範圍時回傳錯誤
pub fn minutes(value: i64) -> Result<Duration> {
    Duration::try_minutes(value).with_context(|| format!("分鐘數超出範圍: {value}"))
}

/// 第一支影片的發布時間
pub fn schedule_start(now: DateTime<Utc>, first_delay: Duration) -> Result<DateTime<Utc>> {
    now.checked_add_signed(first_delay)
        .with_context(|| format!("發布時間超出範圍: {now} + {first_delay}"))
}

/// 依序為每支影片分配發布時間，第 `i` 支為 `start + interval * i`
///
/// 任一發布時間無法表示時回傳錯誤
pub fn build_schedule(
    videos: &[UploadedVideo],
    start: DateTime<Utc>,
    interval: Duration,
) -> Result<Vec<ScheduledPublish>> {
    videos
        .iter()
        .enumerate()
        .map(|(index, video)| {
            let publish_at = i32::try_from(index)
                .ok()
                .and_then(|i| interval.checked_mul(i))
                .and_then(|offset| start.checked_add_signed(offset))
                .with_context(|| format!("第 {} 支影片的發布時間超出範圍", index + 1))?;

            Ok(ScheduledPublish {
                video_id: video.video_id.clone(),
                title: video.title.clone(),
                publish_at,
            })
        })
        .collect()
}

/// 平台接受的時間格式，例如 `2030-01-01T08:00:00.000Z`
#[must_use]
pub fn format_publish_time(publish_at: DateTime<Utc>) -> String {
    publish_at.format("%Y-%m-%dT%H:%M:%S.000Z").to_string()
}

#[must_use]
pub fn status_update(entry: &ScheduledPublish) -> VideoStatusUpdate {
    VideoStatusUpdate {
        id: entry.video_id.clone(),
        status: VideoStatus {
            privacy_status: SCHEDULED_PRIVACY_STATUS.to_string(),
            publish_at: format_publish_time(entry.publish_at),
        },
    }
}

/// 將排程逐一送出
///
/// 非致命錯誤記錄警告後繼續，其他錯誤立即中止並回傳
pub fn apply_schedule<P: UploadPlatform + ?Sized>(
    platform: &mut P,
    plan: &[ScheduledPublish],
    shutdown_signal: &AtomicBool,
) -> Result<ScheduleResult, PlatformError> {
    let mut result = ScheduleResult::default();

    for entry in plan {
        if shutdown_signal.load(Ordering::SeqCst) {
            warn!("收到中斷訊號，停止排程");
            break;
        }

        let update = status_update(entry);
        info!(
            "Scheduling video {} to be published at {}",
            update.id, update.status.publish_at
        );

        match platform.update_video_status(&update) {
            Ok(()) => result.scheduled += 1,
            Err(PlatformError::NonCritical(message)) => {
                warn!(
                    "A non-critical issue occurred while scheduling video {}: {message}",
                    update.id
                );
                result.warnings += 1;
            }
            Err(e) => {
                warn!("Failed to schedule video {}: {e}", update.id);
                return Err(e);
            }
        }
    }

    Ok(result)
}
