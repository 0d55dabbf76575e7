//! Per-operation input validation.
//!
//! Every fallible check returns the full list of `{field, message}` pairs
//! so a client sees all problems at once, and nothing reaches the
//! dispatcher until its input is clean.

use serde::Deserialize;

use crate::error::{ApiError, FieldIssue};

/// PUT /brightness body.
#[derive(Debug, Deserialize)]
pub struct BrightnessBody {
    pub value: i64,
}

/// Screen brightness must fit the 1..=255 hardware range.
pub fn brightness(body: &BrightnessBody) -> Result<u8, ApiError> {
    if !(1..=255).contains(&body.value) {
        return Err(ApiError::Validation(vec![FieldIssue::new(
            "value",
            "must be an integer between 1 and 255",
        )]));
    }
    Ok(body.value as u8)
}

/// PUT /volume body.
#[derive(Debug, Deserialize)]
pub struct VolumeBody {
    pub stream: String,
    pub volume: i64,
}

const AUDIO_STREAMS: &[&str] = &["alarm", "music", "notification", "ring", "system", "call"];

pub fn volume(body: &VolumeBody) -> Result<(), ApiError> {
    let mut issues = Vec::new();
    if !AUDIO_STREAMS.contains(&body.stream.as_str()) {
        issues.push(FieldIssue::new(
            "stream",
            format!("must be one of: {}", AUDIO_STREAMS.join(", ")),
        ));
    }
    if body.volume < 0 {
        issues.push(FieldIssue::new("volume", "must be a non-negative integer"));
    }
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(issues))
    }
}

/// One entry of a POST /sms batch.
#[derive(Debug, Deserialize)]
pub struct SmsEntry {
    pub sim_slot: i64,
    pub to: String,
    pub body: String,
}

pub const SMS_BODY_MAX: usize = 255;

/// An SMS batch is all-or-nothing: any bad entry rejects the whole batch
/// before a single message is dispatched.
pub fn sms_batch(entries: &[SmsEntry]) -> Result<(), ApiError> {
    if entries.is_empty() {
        return Err(ApiError::Validation(vec![FieldIssue::new(
            "messages",
            "at least one message is required",
        )]));
    }

    let mut issues = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        if entry.sim_slot < 0 {
            issues.push(FieldIssue::new(
                format!("[{i}].sim_slot"),
                "must be a non-negative integer",
            ));
        }
        if entry.to.trim().is_empty() {
            issues.push(FieldIssue::new(format!("[{i}].to"), "destination is required"));
        }
        if entry.body.chars().count() > SMS_BODY_MAX {
            issues.push(FieldIssue::new(
                format!("[{i}].body"),
                format!("must be at most {SMS_BODY_MAX} characters"),
            ));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(issues))
    }
}

/// GET /media/camera query.
#[derive(Debug, Deserialize)]
pub struct CameraQuery {
    pub cam_number: Option<i64>,
}

pub fn camera(query: &CameraQuery) -> Result<u32, ApiError> {
    match query.cam_number {
        Some(n) if n >= 0 => Ok(n as u32),
        Some(_) => Err(ApiError::Validation(vec![FieldIssue::new(
            "cam_number",
            "must be a non-negative integer",
        )])),
        None => Err(ApiError::Validation(vec![FieldIssue::new(
            "cam_number",
            "is required",
        )])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issues(err: ApiError) -> Vec<FieldIssue> {
        match err {
            ApiError::Validation(issues) => issues,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn brightness_accepts_bounds() {
        assert_eq!(brightness(&BrightnessBody { value: 1 }).unwrap(), 1);
        assert_eq!(brightness(&BrightnessBody { value: 255 }).unwrap(), 255);
    }

    #[test]
    fn brightness_rejects_out_of_range() {
        for value in [0, -1, 256, 999] {
            let err = brightness(&BrightnessBody { value }).unwrap_err();
            let issues = issues(err);
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].field, "value");
        }
    }

    #[test]
    fn volume_rejects_unknown_stream_and_negative_volume() {
        let err = volume(&VolumeBody {
            stream: "bogus".into(),
            volume: -1,
        })
        .unwrap_err();
        let issues = issues(err);
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn volume_accepts_known_stream() {
        volume(&VolumeBody {
            stream: "music".into(),
            volume: 4,
        })
        .unwrap();
    }

    #[test]
    fn sms_batch_rejects_empty() {
        assert!(sms_batch(&[]).is_err());
    }

    #[test]
    fn sms_batch_rejects_single_bad_entry() {
        let entries = vec![
            SmsEntry {
                sim_slot: 0,
                to: "081234567890".into(),
                body: "fine".into(),
            },
            SmsEntry {
                sim_slot: 0,
                to: "081234567890".into(),
                body: "x".repeat(SMS_BODY_MAX + 1),
            },
        ];
        let issues = issues(sms_batch(&entries).unwrap_err());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "[1].body");
    }

    #[test]
    fn sms_batch_accepts_valid_entries() {
        let entries = vec![SmsEntry {
            sim_slot: 1,
            to: "081234567890".into(),
            body: "x".repeat(SMS_BODY_MAX),
        }];
        sms_batch(&entries).unwrap();
    }

    #[test]
    fn camera_requires_cam_number() {
        assert!(camera(&CameraQuery { cam_number: None }).is_err());
        assert!(camera(&CameraQuery {
            cam_number: Some(-1)
        })
        .is_err());
        assert_eq!(
            camera(&CameraQuery {
                cam_number: Some(0)
            })
            .unwrap(),
            0
        );
    }
}
