//! Image and snapshot import tasks.
//!
//! [`ImportSnapshotTask`] is a [`SnapshotDetail`] with an id: it offers every
//! closing tag to the detail first and only interprets names the detail does
//! not claim.

use ec2wire_xml::{
    Attributes, Collector, DecodeResult, DecodingDelegate, FieldAssign, UnknownFields,
};
use serde::Serialize;

/// Where the source disk image of an import lives.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBucketDetails {
    pub s3_bucket: Option<String>,
    pub s3_key: Option<String>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl DecodingDelegate for UserBucketDetails {
    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "s3Bucket" => self.s3_bucket = Some(text.to_owned()),
            "s3Key" => self.s3_key = Some(text.to_owned()),
            _ => self.extra.record(name, text),
        }
        Ok(())
    }
}

/// Progress of one disk of an import.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDetail {
    pub description: Option<String>,
    pub device_name: Option<String>,
    pub disk_image_size: Option<String>,
    pub format: Option<String>,
    pub progress: Option<String>,
    pub snapshot_id: Option<String>,
    pub status: Option<String>,
    pub status_message: Option<String>,
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_bucket: Option<UserBucketDetails>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl FieldAssign for SnapshotDetail {
    fn assign(&mut self, name: &str, text: &str) -> DecodeResult<bool> {
        let field = match name {
            "description" => &mut self.description,
            "deviceName" => &mut self.device_name,
            "diskImageSize" => &mut self.disk_image_size,
            "format" => &mut self.format,
            "progress" => &mut self.progress,
            "snapshotId" => &mut self.snapshot_id,
            "status" => &mut self.status,
            "statusMessage" => &mut self.status_message,
            "url" => &mut self.url,
            _ => return Ok(false),
        };
        *field = Some(text.to_owned());
        Ok(true)
    }
}

impl DecodingDelegate for SnapshotDetail {
    fn on_open(&mut self, name: &str, _: &Attributes) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "userBucket" => Some(self.user_bucket.insert(UserBucketDetails::default())),
            _ => None,
        }
    }

    fn active_child(&mut self, name: &str) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "userBucket" => self
                .user_bucket
                .as_mut()
                .map(|bucket| bucket as &mut dyn DecodingDelegate),
            _ => None,
        }
    }

    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        if !self.assign(name, text)? {
            self.extra.record(name, text);
        }
        Ok(())
    }
}

/// Answer to `ImportSnapshot` and one entry of `DescribeImportSnapshotTasks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSnapshotTask {
    /// The `importTaskId`.
    pub id: Option<String>,
    #[serde(flatten)]
    pub detail: SnapshotDetail,
}

impl DecodingDelegate for ImportSnapshotTask {
    fn on_open(&mut self, name: &str, attributes: &Attributes) -> Option<&mut dyn DecodingDelegate> {
        self.detail.on_open(name, attributes)
    }

    fn active_child(&mut self, name: &str) -> Option<&mut dyn DecodingDelegate> {
        self.detail.active_child(name)
    }

    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        if self.detail.assign(name, text)? {
            return Ok(());
        }
        match name {
            "importTaskId" => self.id = Some(text.to_owned()),
            _ => self.detail.extra.record(name, text),
        }
        Ok(())
    }
}

/// Answer to `ImportImage` and one entry of `DescribeImportImageTasks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportImageTask {
    /// The `importTaskId`.
    pub id: Option<String>,
    pub image_id: Option<String>,
    pub architecture: Option<String>,
    pub description: Option<String>,
    pub hypervisor: Option<String>,
    pub license_type: Option<String>,
    pub platform: Option<String>,
    pub progress: Option<String>,
    pub status: Option<String>,
    pub status_message: Option<String>,
    pub snapshot_details: Collector<SnapshotDetail>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl DecodingDelegate for ImportImageTask {
    fn on_open(&mut self, name: &str, _: &Attributes) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "snapshotDetails" => Some(self.snapshot_details.reset()),
            _ => None,
        }
    }

    fn active_child(&mut self, name: &str) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "snapshotDetails" => Some(&mut self.snapshot_details),
            _ => None,
        }
    }

    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        let field = match name {
            "importTaskId" => &mut self.id,
            "imageId" => &mut self.image_id,
            "architecture" => &mut self.architecture,
            "description" => &mut self.description,
            "hypervisor" => &mut self.hypervisor,
            "licenseType" => &mut self.license_type,
            "platform" => &mut self.platform,
            "progress" => &mut self.progress,
            "status" => &mut self.status,
            "statusMessage" => &mut self.status_message,
            _ => {
                self.extra.record(name, text);
                return Ok(());
            }
        };
        *field = Some(text.to_owned());
        Ok(())
    }
}

/// Answer to `CancelImportTask`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelledImportTask {
    pub import_task_id: Option<String>,
    pub state: Option<String>,
    pub previous_state: Option<String>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl DecodingDelegate for CancelledImportTask {
    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "importTaskId" => self.import_task_id = Some(text.to_owned()),
            "state" => self.state = Some(text.to_owned()),
            "previousState" => self.previous_state = Some(text.to_owned()),
            _ => self.extra.record(name, text),
        }
        Ok(())
    }
}
