/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

//! Symbolic names understood by the iDRAC `/data` endpoint and their wire codes.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("unknown power state '{0}' (on|off|cold_reboot|warm_reboot|nmi|graceful_shutdown)")]
    UnknownPowerState(String),
    #[error("device returned unknown power state code {0}")]
    UnknownPowerStateCode(u8),
    #[error("unknown boot device '{0}' (none|pxe|hdd|bios|virtual_cd|local_sd|local_cd)")]
    UnknownBootDevice(String),
    #[error("device returned unknown boot device code {0}")]
    UnknownBootDeviceCode(u8),
}

/// A queryable attribute. The device decides what is valid, so any token can be
/// sent; the associated constants are the ones the firmware is known to answer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Attribute(Cow<'static, str>);

impl Attribute {
    pub const POWER_STATUS: Attribute = Attribute::from_static("pwState");
    pub const SYSTEM_DESCRIPTION: Attribute = Attribute::from_static("sysDesc");
    pub const SYSTEM_REVISION: Attribute = Attribute::from_static("sysRev");
    pub const HOST_NAME: Attribute = Attribute::from_static("hostName");
    pub const OS_NAME: Attribute = Attribute::from_static("osName");
    pub const OS_VERSION: Attribute = Attribute::from_static("osVersion");
    pub const SERVICE_TAG: Attribute = Attribute::from_static("svcTag");
    pub const EXPRESS_SERVICE_CODE: Attribute = Attribute::from_static("expSvcCode");
    pub const BIOS_VERSION: Attribute = Attribute::from_static("biosVer");
    pub const FIRMWARE_VERSION: Attribute = Attribute::from_static("fwVersion");
    pub const LCC_FIRMWARE_VERSION: Attribute = Attribute::from_static("LCCfwVersion");
    pub const IPV4_ENABLED: Attribute = Attribute::from_static("v4Enabled");
    pub const IPV4_ADDRESS: Attribute = Attribute::from_static("v4IPAddr");
    pub const IPV6_ENABLED: Attribute = Attribute::from_static("v6Enabled");
    pub const IPV6_LINK_LOCAL: Attribute = Attribute::from_static("v6LinkLocal");
    pub const IPV6_ADDRESS: Attribute = Attribute::from_static("v6Addr");
    pub const IPV6_SITE_LOCAL: Attribute = Attribute::from_static("v6SiteLocal");
    pub const MAC_ADDRESS: Attribute = Attribute::from_static("macAddr");
    pub const BATTERIES: Attribute = Attribute::from_static("batteries");
    pub const FAN_REDUNDANCY: Attribute = Attribute::from_static("fansRedundancy");
    pub const FANS: Attribute = Attribute::from_static("fans");
    pub const INTRUSION: Attribute = Attribute::from_static("intrusion");
    pub const POWER_SUPPLY_REDUNDANCY: Attribute = Attribute::from_static("psRedundancy");
    pub const POWER_SUPPLIES: Attribute = Attribute::from_static("powerSupplies");
    pub const RMV_REDUNDANCY: Attribute = Attribute::from_static("rmvsRedundancy");
    pub const REMOVABLE_STORAGE: Attribute = Attribute::from_static("removableStorage");
    pub const TEMPERATURES: Attribute = Attribute::from_static("temperatures");
    pub const VOLTAGES: Attribute = Attribute::from_static("voltages");
    pub const KVM_ENABLED: Attribute = Attribute::from_static("kvmEnabled");
    pub const POWER_BUDGET_DATA: Attribute = Attribute::from_static("budgetpowerdata");
    pub const EVENT_LOG: Attribute = Attribute::from_static("eventLogEntries");
    pub const BOOT_ONCE: Attribute = Attribute::from_static("vmBootOnce");
    pub const FIRST_BOOT_DEVICE: Attribute = Attribute::from_static("firstBootDevice");
    pub const VFK_LICENSE: Attribute = Attribute::from_static("vfkLicense");
    pub const USER: Attribute = Attribute::from_static("user");
    pub const IDRAC_LOG: Attribute = Attribute::from_static("racLogEntries");

    pub const fn from_static(token: &'static str) -> Attribute {
        Attribute(Cow::Borrowed(token))
    }

    pub fn new(token: impl Into<String>) -> Attribute {
        Attribute(Cow::Owned(token.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Known attributes, in the order `help` lists them.
    pub fn known() -> &'static [Attribute] {
        &KNOWN_ATTRIBUTES
    }

    pub fn is_known(&self) -> bool {
        KNOWN_ATTRIBUTES.contains(self)
    }
}

static KNOWN_ATTRIBUTES: [Attribute; 36] = [
    Attribute::POWER_STATUS,
    Attribute::SYSTEM_DESCRIPTION,
    Attribute::SYSTEM_REVISION,
    Attribute::HOST_NAME,
    Attribute::OS_NAME,
    Attribute::OS_VERSION,
    Attribute::SERVICE_TAG,
    Attribute::EXPRESS_SERVICE_CODE,
    Attribute::BIOS_VERSION,
    Attribute::FIRMWARE_VERSION,
    Attribute::LCC_FIRMWARE_VERSION,
    Attribute::IPV4_ENABLED,
    Attribute::IPV4_ADDRESS,
    Attribute::IPV6_ENABLED,
    Attribute::IPV6_LINK_LOCAL,
    Attribute::IPV6_ADDRESS,
    Attribute::IPV6_SITE_LOCAL,
    Attribute::MAC_ADDRESS,
    Attribute::BATTERIES,
    Attribute::FAN_REDUNDANCY,
    Attribute::FANS,
    Attribute::INTRUSION,
    Attribute::POWER_SUPPLY_REDUNDANCY,
    Attribute::POWER_SUPPLIES,
    Attribute::RMV_REDUNDANCY,
    Attribute::REMOVABLE_STORAGE,
    Attribute::TEMPERATURES,
    Attribute::VOLTAGES,
    Attribute::KVM_ENABLED,
    Attribute::POWER_BUDGET_DATA,
    Attribute::EVENT_LOG,
    Attribute::BOOT_ONCE,
    Attribute::FIRST_BOOT_DEVICE,
    Attribute::VFK_LICENSE,
    Attribute::USER,
    Attribute::IDRAC_LOG,
];

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Attribute {
    fn from(s: &str) -> Attribute {
        Attribute::new(s)
    }
}

impl From<String> for Attribute {
    fn from(s: String) -> Attribute {
        Attribute::new(s)
    }
}

/// `pwState` values. The codes are fixed by the firmware.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::EnumIter)]
pub enum PowerState {
    Off,
    On,
    ColdReboot,
    WarmReboot,
    NonMaskingInterrupt,
    GracefulShutdown,
}

impl PowerState {
    pub fn code(self) -> u8 {
        match self {
            PowerState::Off => 0,
            PowerState::On => 1,
            PowerState::ColdReboot => 2,
            PowerState::WarmReboot => 3,
            PowerState::NonMaskingInterrupt => 4,
            PowerState::GracefulShutdown => 5,
        }
    }

    /// Name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            PowerState::Off => "off",
            PowerState::On => "on",
            PowerState::ColdReboot => "cold_reboot",
            PowerState::WarmReboot => "warm_reboot",
            PowerState::NonMaskingInterrupt => "nmi",
            PowerState::GracefulShutdown => "graceful_shutdown",
        }
    }
}

impl TryFrom<u8> for PowerState {
    type Error = CodecError;

    fn try_from(code: u8) -> Result<PowerState, CodecError> {
        match code {
            0 => Ok(PowerState::Off),
            1 => Ok(PowerState::On),
            2 => Ok(PowerState::ColdReboot),
            3 => Ok(PowerState::WarmReboot),
            4 => Ok(PowerState::NonMaskingInterrupt),
            5 => Ok(PowerState::GracefulShutdown),
            other => Err(CodecError::UnknownPowerStateCode(other)),
        }
    }
}

impl FromStr for PowerState {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<PowerState, CodecError> {
        match s {
            "off" => Ok(PowerState::Off),
            "on" => Ok(PowerState::On),
            "cold_reboot" => Ok(PowerState::ColdReboot),
            "warm_reboot" => Ok(PowerState::WarmReboot),
            "nmi" => Ok(PowerState::NonMaskingInterrupt),
            "graceful_shutdown" => Ok(PowerState::GracefulShutdown),
            other => Err(CodecError::UnknownPowerState(other.to_string())),
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `firstBootDevice` values. The firmware codes are not sequential.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::EnumIter)]
pub enum BootDevice {
    NoOverride,
    Pxe,
    HardDrive,
    Bios,
    VirtualCd,
    LocalSd,
    LocalCd,
}

impl BootDevice {
    pub fn code(self) -> u8 {
        match self {
            BootDevice::NoOverride => 0,
            BootDevice::Pxe => 1,
            BootDevice::HardDrive => 2,
            BootDevice::LocalCd => 5,
            BootDevice::Bios => 6,
            BootDevice::VirtualCd => 8,
            BootDevice::LocalSd => 16,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BootDevice::NoOverride => "none",
            BootDevice::Pxe => "pxe",
            BootDevice::HardDrive => "hdd",
            BootDevice::Bios => "bios",
            BootDevice::VirtualCd => "virtual_cd",
            BootDevice::LocalSd => "local_sd",
            BootDevice::LocalCd => "local_cd",
        }
    }
}

impl TryFrom<u8> for BootDevice {
    type Error = CodecError;

    fn try_from(code: u8) -> Result<BootDevice, CodecError> {
        match code {
            0 => Ok(BootDevice::NoOverride),
            1 => Ok(BootDevice::Pxe),
            2 => Ok(BootDevice::HardDrive),
            5 => Ok(BootDevice::LocalCd),
            6 => Ok(BootDevice::Bios),
            8 => Ok(BootDevice::VirtualCd),
            16 => Ok(BootDevice::LocalSd),
            other => Err(CodecError::UnknownBootDeviceCode(other)),
        }
    }
}

impl FromStr for BootDevice {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<BootDevice, CodecError> {
        match s {
            "none" => Ok(BootDevice::NoOverride),
            "pxe" => Ok(BootDevice::Pxe),
            "hdd" => Ok(BootDevice::HardDrive),
            "bios" => Ok(BootDevice::Bios),
            "virtual_cd" => Ok(BootDevice::VirtualCd),
            "local_sd" => Ok(BootDevice::LocalSd),
            "local_cd" => Ok(BootDevice::LocalCd),
            other => Err(CodecError::UnknownBootDevice(other.to_string())),
        }
    }
}

impl fmt::Display for BootDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
