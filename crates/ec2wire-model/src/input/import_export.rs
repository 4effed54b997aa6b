//! Image and snapshot imports, instance exports.

use ec2wire_query::{IndexBase, ParamList, ParamObject, ToParams};
use serde::Deserialize;

use crate::input::{Ec2Request, dry_run};
use crate::operations::Ec2Action;

/// S3 location of a disk image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UserBucket {
    pub s3_bucket: Option<String>,
    pub s3_key: Option<String>,
}

impl ToParams for UserBucket {
    fn to_params(&self) -> ParamObject {
        ParamObject::new()
            .optional("S3Bucket", self.s3_bucket.as_deref())
            .optional("S3Key", self.s3_key.as_deref())
    }
}

/// One disk of an import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DiskContainer {
    pub description: Option<String>,
    pub device_name: Option<String>,
    pub format: Option<String>,
    pub snapshot_id: Option<String>,
    pub url: Option<String>,
    pub user_bucket: Option<UserBucket>,
}

impl ToParams for DiskContainer {
    fn to_params(&self) -> ParamObject {
        ParamObject::new()
            .optional("Description", self.description.as_deref())
            .optional("DeviceName", self.device_name.as_deref())
            .optional("Format", self.format.as_deref())
            .optional("SnapshotId", self.snapshot_id.as_deref())
            .optional("Url", self.url.as_deref())
            .object("UserBucket", self.user_bucket.as_ref().map(ToParams::to_params))
    }
}

/// `ImportImage`: disks are sent as `DiskContainer.1`, `DiskContainer.2`, ...
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportImageRequest {
    pub disk_containers: Vec<DiskContainer>,
    pub description: Option<String>,
    pub architecture: Option<String>,
    pub platform: Option<String>,
    pub hypervisor: Option<String>,
    pub license_type: Option<String>,
    pub client_token: Option<String>,
    pub role_name: Option<String>,
    pub dry_run: bool,
}

impl ToParams for ImportImageRequest {
    fn to_params(&self) -> ParamObject {
        ParamObject::new()
            .list(
                "DiskContainer",
                ParamList::of_objects(
                    IndexBase::One,
                    self.disk_containers.iter().map(ToParams::to_params),
                ),
            )
            .optional("Description", self.description.as_deref())
            .optional("Architecture", self.architecture.as_deref())
            .optional("Platform", self.platform.as_deref())
            .optional("Hypervisor", self.hypervisor.as_deref())
            .optional("LicenseType", self.license_type.as_deref())
            .optional("ClientToken", self.client_token.as_deref())
            .optional("RoleName", self.role_name.as_deref())
            .optional("DryRun", dry_run(self.dry_run))
    }
}

impl Ec2Request for ImportImageRequest {
    fn action(&self) -> Ec2Action {
        Ec2Action::ImportImage
    }
}

/// `ImportSnapshot`: the single disk is sent as `DiskContainer.<field>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSnapshotRequest {
    pub disk_container: DiskContainer,
    pub description: Option<String>,
    pub client_token: Option<String>,
    pub role_name: Option<String>,
    pub dry_run: bool,
}

impl ImportSnapshotRequest {
    /// Import the object `key` of `bucket` in the given disk format.
    #[must_use]
    pub fn from_bucket(bucket: &str, key: &str, format: &str) -> Self {
        Self {
            disk_container: DiskContainer {
                format: Some(format.to_owned()),
                user_bucket: Some(UserBucket {
                    s3_bucket: Some(bucket.to_owned()),
                    s3_key: Some(key.to_owned()),
                }),
                ..DiskContainer::default()
            },
            ..Self::default()
        }
    }
}

impl ToParams for ImportSnapshotRequest {
    fn to_params(&self) -> ParamObject {
        ParamObject::new()
            .object("DiskContainer", Some(self.disk_container.to_params()))
            .optional("Description", self.description.as_deref())
            .optional("ClientToken", self.client_token.as_deref())
            .optional("RoleName", self.role_name.as_deref())
            .optional("DryRun", dry_run(self.dry_run))
    }
}

impl Ec2Request for ImportSnapshotRequest {
    fn action(&self) -> Ec2Action {
        Ec2Action::ImportSnapshot
    }
}

/// `DescribeImportImageTasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeImportImageTasksRequest {
    pub import_task_ids: Vec<String>,
    pub next_token: Option<String>,
    pub max_results: Option<u32>,
    pub dry_run: bool,
}

impl ToParams for DescribeImportImageTasksRequest {
    fn to_params(&self) -> ParamObject {
        describe_import_tasks(
            &self.import_task_ids,
            self.next_token.as_deref(),
            self.max_results,
            self.dry_run,
        )
    }
}

impl Ec2Request for DescribeImportImageTasksRequest {
    fn action(&self) -> Ec2Action {
        Ec2Action::DescribeImportImageTasks
    }
}

/// `DescribeImportSnapshotTasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeImportSnapshotTasksRequest {
    pub import_task_ids: Vec<String>,
    pub next_token: Option<String>,
    pub max_results: Option<u32>,
    pub dry_run: bool,
}

impl ToParams for DescribeImportSnapshotTasksRequest {
    fn to_params(&self) -> ParamObject {
        describe_import_tasks(
            &self.import_task_ids,
            self.next_token.as_deref(),
            self.max_results,
            self.dry_run,
        )
    }
}

impl Ec2Request for DescribeImportSnapshotTasksRequest {
    fn action(&self) -> Ec2Action {
        Ec2Action::DescribeImportSnapshotTasks
    }
}

fn describe_import_tasks(
    ids: &[String],
    next_token: Option<&str>,
    max_results: Option<u32>,
    requested_dry_run: bool,
) -> ParamObject {
    ParamObject::new()
        .list("ImportTaskId", ParamList::of_values(IndexBase::One, ids))
        .optional("NextToken", next_token)
        .optional("MaxResults", max_results)
        .optional("DryRun", dry_run(requested_dry_run))
}

/// `CancelImportTask`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancelImportTaskRequest {
    pub import_task_id: String,
    pub cancel_reason: Option<String>,
    pub dry_run: bool,
}

impl CancelImportTaskRequest {
    #[must_use]
    pub fn new(import_task_id: impl Into<String>) -> Self {
        Self {
            import_task_id: import_task_id.into(),
            ..Self::default()
        }
    }
}

impl ToParams for CancelImportTaskRequest {
    fn to_params(&self) -> ParamObject {
        ParamObject::new()
            .value("ImportTaskId", &self.import_task_id)
            .optional("CancelReason", self.cancel_reason.as_deref())
            .optional("DryRun", dry_run(self.dry_run))
    }
}

impl Ec2Request for CancelImportTaskRequest {
    fn action(&self) -> Ec2Action {
        Ec2Action::CancelImportTask
    }
}

/// Destination of an instance export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ExportToS3Task {
    pub s3_bucket: Option<String>,
    pub s3_prefix: Option<String>,
    pub disk_image_format: Option<String>,
    pub container_format: Option<String>,
}

impl ToParams for ExportToS3Task {
    fn to_params(&self) -> ParamObject {
        ParamObject::new()
            .optional("S3Bucket", self.s3_bucket.as_deref())
            .optional("S3Prefix", self.s3_prefix.as_deref())
            .optional("DiskImageFormat", self.disk_image_format.as_deref())
            .optional("ContainerFormat", self.container_format.as_deref())
    }
}

/// `CreateInstanceExportTask`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateInstanceExportTaskRequest {
    pub instance_id: String,
    pub target_environment: Option<String>,
    pub export_to_s3: ExportToS3Task,
    pub description: Option<String>,
    pub dry_run: bool,
}

impl ToParams for CreateInstanceExportTaskRequest {
    fn to_params(&self) -> ParamObject {
        ParamObject::new()
            .value("InstanceId", &self.instance_id)
            .optional("TargetEnvironment", self.target_environment.as_deref())
            .object("ExportToS3", Some(self.export_to_s3.to_params()))
            .optional("Description", self.description.as_deref())
            .optional("DryRun", dry_run(self.dry_run))
    }
}

impl Ec2Request for CreateInstanceExportTaskRequest {
    fn action(&self) -> Ec2Action {
        Ec2Action::CreateInstanceExportTask
    }
}

/// `DescribeExportTasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeExportTasksRequest {
    pub export_task_ids: Vec<String>,
    pub dry_run: bool,
}

impl ToParams for DescribeExportTasksRequest {
    fn to_params(&self) -> ParamObject {
        ParamObject::new()
            .list(
                "ExportTaskId",
                ParamList::of_values(IndexBase::One, &self.export_task_ids),
            )
            .optional("DryRun", dry_run(self.dry_run))
    }
}

impl Ec2Request for DescribeExportTasksRequest {
    fn action(&self) -> Ec2Action {
        Ec2Action::DescribeExportTasks
    }
}

/// `CancelExportTask`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancelExportTaskRequest {
    pub export_task_id: String,
    pub dry_run: bool,
}

impl ToParams for CancelExportTaskRequest {
    fn to_params(&self) -> ParamObject {
        ParamObject::new()
            .value("ExportTaskId", &self.export_task_id)
            .optional("DryRun", dry_run(self.dry_run))
    }
}

impl Ec2Request for CancelExportTaskRequest {
    fn action(&self) -> Ec2Action {
        Ec2Action::CancelExportTask
    }
}
