//! Response entities.
//!
//! Every entity keeps the elements it does not recognize in an `extra`
//! [`UnknownFields`](ec2wire_xml::UnknownFields) store, so fields added by the
//! service later are not lost.

pub mod address;
pub mod export_task;
pub mod import_task;
pub mod network;
pub mod tag;
pub mod tariff;
pub mod virtual_switch;

pub use address::{AddressPool, AddressRange, ByoipCidr};
pub use export_task::{ExportTask, ExportVolumeTask};
pub use import_task::{
    CancelledImportTask, ImportImageTask, ImportSnapshotTask, SnapshotDetail, UserBucketDetails,
};
pub use network::{
    Association, Attachment, ExtNetwork, GroupRef, NetworkInterface, PrivateIp, PrivateIpAddress,
};
pub use tag::{Tag, TagSet};
pub use tariff::{
    Tariff, TariffHostType, TariffInstance, TariffInstanceType, TariffLicenceType,
    TariffLicenceTypeParameters, TariffOs, TariffRate, TariffService, TariffVolume,
};
pub use virtual_switch::VirtualSwitch;
