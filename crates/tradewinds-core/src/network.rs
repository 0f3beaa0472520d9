//! Virtual network descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// An IPv4 CIDR block, e.g. `10.0.0.0/24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CidrBlock {
    octets: [u8; 4],
    prefix: u8,
}

impl CidrBlock {
    pub fn new(octets: [u8; 4], prefix: u8) -> CoreResult<Self> {
        if prefix > 32 {
            return Err(CoreError::InvalidCidr(format!(
                "prefix /{prefix} out of range"
            )));
        }
        Ok(CidrBlock { octets, prefix })
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }
}

impl FromStr for CidrBlock {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let bad = || CoreError::InvalidCidr(s.to_string());
        let (addr, prefix) = s.split_once('/').ok_or_else(bad)?;
        let prefix: u8 = prefix.parse().map_err(|_| bad())?;
        let mut octets = [0u8; 4];
        let mut parts = addr.split('.');
        for octet in &mut octets {
            *octet = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        }
        if parts.next().is_some() {
            return Err(bad());
        }
        CidrBlock::new(octets, prefix)
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets;
        write!(f, "{a}.{b}.{c}.{d}/{}", self.prefix)
    }
}

impl TryFrom<String> for CidrBlock {
    type Error = CoreError;

    fn try_from(s: String) -> CoreResult<Self> {
        s.parse()
    }
}

impl From<CidrBlock> for String {
    fn from(c: CidrBlock) -> String {
        c.to_string()
    }
}

/// Whether a subnet group routes through an internet gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubnetVisibility {
    Public,
    Private,
}

/// One subnet group, replicated across every availability zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubnetGroup {
    pub name: String,
    /// Prefix length carved out of the network CIDR per zone.
    pub cidr_mask: u8,
    pub visibility: SubnetVisibility,
}

/// Specification for an isolated virtual network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub name: String,
    pub cidr: CidrBlock,
    /// Number of availability zones to span.
    pub max_azs: u32,
    /// Outbound NAT gateway count. Zero means workloads needing egress
    /// must hold a public IP directly.
    pub nat_gateways: u32,
    pub internet_gateway: bool,
    pub dns_support: bool,
    pub dns_hostnames: bool,
    pub subnets: Vec<SubnetGroup>,
}

impl NetworkSpec {
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::EmptyName("network"));
        }
        if self.max_azs == 0 {
            return Err(CoreError::InvalidCapacity(
                "network must span at least one availability zone".into(),
            ));
        }
        for group in &self.subnets {
            if group.cidr_mask < self.cidr.prefix() || group.cidr_mask > 32 {
                return Err(CoreError::InvalidCidr(format!(
                    "subnet mask /{} does not fit in {}",
                    group.cidr_mask, self.cidr
                )));
            }
        }
        Ok(())
    }

    pub fn public_subnet_groups(&self) -> impl Iterator<Item = &SubnetGroup> {
        self.subnets
            .iter()
            .filter(|g| g.visibility == SubnetVisibility::Public)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cidr_round_trip() {
        let cidr: CidrBlock = "10.0.0.0/24".parse().unwrap();
        assert_eq!(cidr.to_string(), "10.0.0.0/24");
        assert_eq!(cidr.prefix(), 24);
    }

    #[test]
    fn reject_malformed_cidr() {
        assert!("10.0.0.0".parse::<CidrBlock>().is_err());
        assert!("10.0.0/24".parse::<CidrBlock>().is_err());
        assert!("10.0.0.256/24".parse::<CidrBlock>().is_err());
        assert!("10.0.0.0/33".parse::<CidrBlock>().is_err());
    }

    #[test]
    fn subnet_mask_must_fit_network() {
        let spec = NetworkSpec {
            name: "vpc".into(),
            cidr: "10.0.0.0/24".parse().unwrap(),
            max_azs: 2,
            nat_gateways: 0,
            internet_gateway: true,
            dns_support: true,
            dns_hostnames: true,
            subnets: vec![SubnetGroup {
                name: "public".into(),
                cidr_mask: 16,
                visibility: SubnetVisibility::Public,
            }],
        };
        assert!(spec.validate().is_err());
    }
}
