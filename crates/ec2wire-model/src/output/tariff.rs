//! Price lists (`DescribeTariffs`).
//!
//! Volume, OS, instance type and host entries are specializations of
//! [`TariffService`]. Each holds its service by value and only looks at
//! element names the service did not claim.

use ec2wire_xml::{
    Attributes, Collector, DecodeResult, DecodingDelegate, FieldAssign, UnknownFields,
    value::{parse_bool, parse_decimal, parse_int},
};
use rust_decimal::Decimal;
use serde::Serialize;

/// One tariff with its priced resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tariff {
    pub name: Option<String>,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub instances: Collector<TariffInstance>,
    pub instance_types: Collector<TariffInstanceType>,
    pub volumes: Collector<TariffVolume>,
    pub others: Collector<TariffService>,
    pub oses: Collector<TariffOs>,
    pub hosts: Collector<TariffHostType>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl DecodingDelegate for Tariff {
    fn on_open(&mut self, name: &str, _: &Attributes) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "instances" => Some(self.instances.reset()),
            "instance_types" => Some(self.instance_types.reset()),
            "volumes" => Some(self.volumes.reset()),
            "others" => Some(self.others.reset()),
            "oses" => Some(self.oses.reset()),
            "hosts" => Some(self.hosts.reset()),
            _ => None,
        }
    }

    fn active_child(&mut self, name: &str) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "instances" => Some(&mut self.instances),
            "instance_types" => Some(&mut self.instance_types),
            "volumes" => Some(&mut self.volumes),
            "others" => Some(&mut self.others),
            "oses" => Some(&mut self.oses),
            "hosts" => Some(&mut self.hosts),
            _ => None,
        }
    }

    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "name" => self.name = Some(text.to_owned()),
            "currency" => self.currency = Some(text.to_owned()),
            "description" => self.description = Some(text.to_owned()),
            _ => self.extra.record(name, text),
        }
        Ok(())
    }
}

/// An instance offering and the services billed with it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TariffInstance {
    pub name: Option<String>,
    pub cpu: Option<u32>,
    pub ccus: Option<Decimal>,
    pub memory: Option<u64>,
    pub services: Collector<TariffService>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl DecodingDelegate for TariffInstance {
    fn on_open(&mut self, name: &str, _: &Attributes) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "services" => Some(self.services.reset()),
            _ => None,
        }
    }

    fn active_child(&mut self, name: &str) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "services" => Some(&mut self.services),
            _ => None,
        }
    }

    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "name" => self.name = Some(text.to_owned()),
            "cpu" => self.cpu = Some(parse_int(name, text)?),
            "ccus" => self.ccus = Some(parse_decimal(name, text)?),
            "memory" => self.memory = Some(parse_int(name, text)?),
            _ => self.extra.record(name, text),
        }
        Ok(())
    }
}

/// A billable service with its per-zone rates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TariffService {
    pub name: Option<String>,
    pub description: Option<String>,
    pub measure: Option<String>,
    /// `false` unless the service says otherwise.
    pub deprecated: bool,
    pub rates: Collector<TariffRate>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl FieldAssign for TariffService {
    fn assign(&mut self, name: &str, text: &str) -> DecodeResult<bool> {
        match name {
            "name" => self.name = Some(text.to_owned()),
            "description" => self.description = Some(text.to_owned()),
            "measure" => self.measure = Some(text.to_owned()),
            "deprecated" => self.deprecated = parse_bool(name, text)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl DecodingDelegate for TariffService {
    fn on_open(&mut self, name: &str, _: &Attributes) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "rates" => Some(self.rates.reset()),
            _ => None,
        }
    }

    fn active_child(&mut self, name: &str) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "rates" => Some(&mut self.rates),
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

/// Price of a service in one availability zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TariffRate {
    pub price: Option<Decimal>,
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl DecodingDelegate for TariffRate {
    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "price" => self.price = Some(parse_decimal(name, text)?),
            "availability_zone" => self.availability_zone = Some(text.to_owned()),
            _ => self.extra.record(name, text),
        }
        Ok(())
    }
}

/// A volume type offering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TariffVolume {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub iops: Option<u32>,
    #[serde(flatten)]
    pub service: TariffService,
}

impl DecodingDelegate for TariffVolume {
    fn on_open(&mut self, name: &str, attributes: &Attributes) -> Option<&mut dyn DecodingDelegate> {
        self.service.on_open(name, attributes)
    }

    fn active_child(&mut self, name: &str) -> Option<&mut dyn DecodingDelegate> {
        self.service.active_child(name)
    }

    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        if self.service.assign(name, text)? {
            return Ok(());
        }
        match name {
            "type" => self.kind = Some(text.to_owned()),
            "iops" => self.iops = Some(parse_int(name, text)?),
            _ => self.service.extra.record(name, text),
        }
        Ok(())
    }
}

/// An instance type offering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TariffInstanceType {
    pub cpu: Option<u32>,
    pub memory: Option<u64>,
    pub ccus: Option<Decimal>,
    #[serde(flatten)]
    pub service: TariffService,
}

impl DecodingDelegate for TariffInstanceType {
    fn on_open(&mut self, name: &str, attributes: &Attributes) -> Option<&mut dyn DecodingDelegate> {
        self.service.on_open(name, attributes)
    }

    fn active_child(&mut self, name: &str) -> Option<&mut dyn DecodingDelegate> {
        self.service.active_child(name)
    }

    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        if self.service.assign(name, text)? {
            return Ok(());
        }
        match name {
            "cpu" => self.cpu = Some(parse_int(name, text)?),
            "memory" => self.memory = Some(parse_int(name, text)?),
            "ccus" => self.ccus = Some(parse_decimal(name, text)?),
            _ => self.service.extra.record(name, text),
        }
        Ok(())
    }
}

/// Parameters of a per-core licence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TariffLicenceTypeParameters {
    pub core_count: Option<u32>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl DecodingDelegate for TariffLicenceTypeParameters {
    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "core_count" => self.core_count = Some(parse_int(name, text)?),
            _ => self.extra.record(name, text),
        }
        Ok(())
    }
}

/// How an operating system is licensed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TariffLicenceType {
    pub base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<TariffLicenceTypeParameters>,
    #[serde(skip_serializing_if = "UnknownFields::is_empty")]
    pub extra: UnknownFields,
}

impl DecodingDelegate for TariffLicenceType {
    fn on_open(&mut self, name: &str, _: &Attributes) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "parameters" => Some(self.parameters.insert(TariffLicenceTypeParameters::default())),
            _ => None,
        }
    }

    fn active_child(&mut self, name: &str) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "parameters" => self
                .parameters
                .as_mut()
                .map(|p| p as &mut dyn DecodingDelegate),
            _ => None,
        }
    }

    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        match name {
            "base" => self.base = Some(text.to_owned()),
            _ => self.extra.record(name, text),
        }
        Ok(())
    }
}

/// An operating system offering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TariffOs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licence_type: Option<TariffLicenceType>,
    #[serde(flatten)]
    pub service: TariffService,
}

impl DecodingDelegate for TariffOs {
    fn on_open(&mut self, name: &str, attributes: &Attributes) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "licence_type" => Some(self.licence_type.insert(TariffLicenceType::default())),
            _ => self.service.on_open(name, attributes),
        }
    }

    fn active_child(&mut self, name: &str) -> Option<&mut dyn DecodingDelegate> {
        match name {
            "licence_type" => self
                .licence_type
                .as_mut()
                .map(|l| l as &mut dyn DecodingDelegate),
            _ => self.service.active_child(name),
        }
    }

    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        self.service.on_close(name, text)
    }
}

/// A dedicated host offering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TariffHostType {
    pub cpu_generation: Option<String>,
    pub physical_cores: Option<u32>,
    pub sockets: Option<u32>,
    pub memory: Option<u64>,
    pub ccus: Option<Decimal>,
    pub commitment: Option<u32>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub service: TariffService,
}

impl DecodingDelegate for TariffHostType {
    fn on_open(&mut self, name: &str, attributes: &Attributes) -> Option<&mut dyn DecodingDelegate> {
        self.service.on_open(name, attributes)
    }

    fn active_child(&mut self, name: &str) -> Option<&mut dyn DecodingDelegate> {
        self.service.active_child(name)
    }

    fn on_close(&mut self, name: &str, text: &str) -> DecodeResult<()> {
        if self.service.assign(name, text)? {
            return Ok(());
        }
        match name {
            "cpu_generation" => self.cpu_generation = Some(text.to_owned()),
            "physical_cores" => self.physical_cores = Some(parse_int(name, text)?),
            "sockets" => self.sockets = Some(parse_int(name, text)?),
            "memory" => self.memory = Some(parse_int(name, text)?),
            "ccus" => self.ccus = Some(parse_decimal(name, text)?),
            "commitment" => self.commitment = Some(parse_int(name, text)?),
            "type" => self.kind = Some(text.to_owned()),
            _ => self.service.extra.record(name, text),
        }
        Ok(())
    }
}
