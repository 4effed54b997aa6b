//! Instance export tasks.

use ec2wire_xml::{
    Attributes, Collector, DecodeResult, DecodingDelegate, FieldAssign, UnknownFields,
};
use serde::Serialize;

/// Answer to `CreateInstanceExportTask` and one entry of
/// `DescribeExportTasks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTask {
    /// The `exportTaskId`.
    pub id: Option<String>,
    pub description: Option<String>,
    pub state: Option<String>,
    pub status_message: Option<String>,
    pub instance_id: Option<String>,
    pub target_environment: Option<String>,
    pub container_format: Option<String>,
    pub disk_image_format: Option<String>,
    pub s3_bucket: Option<String>,
    pub s3_key: Option<String>,
    pub volume_export_details: Collector<ExportVolumeTask>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl FieldAssign for ExportTask {
    fn assign(&mut self, name: &str, text: &str) -> DecodeResult<bool> {
        let field = match name {
            "exportTaskId" => &mut self.id,
            "description" => &mut self.description,
            "state" => &mut self.state,
            "statusMessage" => &mut self.status_message,
            "instanceId" => &mut self.instance_id,
            "targetEnvironment" => &mut self.target_environment,
            "containerFormat" => &mut self.container_format,
            "diskImageFormat" => &mut self.disk_image_format,
            "s3Bucket" => &mut self.s3_bucket,
            "s3Key" => &mut self.s3_key,
            _ => return Ok(false),
        };
        *field = Some(text.to_owned());
        Ok(true)
    }
}

impl DecodingDelegate for ExportTask {
    fn on_open(&mut self, name: &str, _: &Attributes) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "volumeExportDetails" => Some(self.volume_export_details.reset()),
            _ => None,
        }
    }

    fn active_child(&mut self, name: &str) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "volumeExportDetails" => Some(&mut self.volume_export_details),
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

/// Export of one volume of an instance export.
///
/// Carries every [`ExportTask`] field plus the volume id. Nested volume
/// lists are not expected here and are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportVolumeTask {
    pub volume_id: Option<String>,
    #[serde(flatten)]
    pub task: ExportTask,
}

impl DecodingDelegate for ExportVolumeTask {
    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        if self.task.assign(name, text)? {
            return Ok(());
        }
        match name {
            "volumeId" => self.volume_id = Some(text.to_owned()),
            _ => self.task.extra.record(name, text),
        }
        Ok(())
    }
}
