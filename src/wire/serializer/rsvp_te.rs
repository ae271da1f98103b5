// Copyright (C) 2024-present The bgp-ext-pkt Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Serializer for RSVP-TE objects and the enclosing TE-LSP attribute TLV.

use crate::{
    rsvp_te::{
        AdminStatusObject, AssociationObject, AttributesSubTlv, BandwidthObject, DetourObject,
        ExcludeRouteObject, ExplicitRouteObject, FastRerouteObject, FlowSpecObject,
        LspAttributesObject, LspRequiredAttributesObject, MetricObject, PrimaryPathRouteObject,
        ProtectionBody, ProtectionObject, RecordRouteObject, RouteSubobject, RsvpTeObject,
        SecondaryExplicitRouteObject, SecondaryRecordRouteObject, SenderTspecObject,
        SessionAttributeObject, TeLspAttributes, TspecParameters,
    },
    wire::serializer::write_tlv_header_t16_l16,
};
use byteorder::{NetworkEndian, WriteBytesExt};
use netgauze_parse_utils::WritablePdu;
use netgauze_serde_macros::WritingError;
use std::io::Write;

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum RsvpTeWritingError {
    StdIOError(#[from_std_io_error] String),
}

/// object framing: value length (header excluded), class-num, c-type
const OBJECT_HEADER_LEN: usize = 4;

#[inline]
fn write_object_header<T: Write>(
    writer: &mut T,
    value_len: usize,
    class_num: u8,
    c_type: u8,
) -> Result<(), RsvpTeWritingError> {
    writer.write_u16::<NetworkEndian>(value_len as u16)?;
    writer.write_u8(class_num)?;
    writer.write_u8(c_type)?;
    Ok(())
}

impl WritablePdu<RsvpTeWritingError> for TeLspAttributes {
    // TLV type and length of the enclosing wrapper
    const BASE_LENGTH: usize = 4;

    fn len(&self) -> usize {
        let mut len = Self::BASE_LENGTH;
        if let Some(obj) = &self.sender_tspec {
            len += obj.len();
        }
        if let Some(obj) = &self.flow_spec {
            len += obj.len();
        }
        if let Some(obj) = &self.session_attribute {
            len += obj.len();
        }
        if let Some(obj) = &self.explicit_route {
            len += obj.len();
        }
        if let Some(obj) = &self.record_route {
            len += obj.len();
        }
        if let Some(obj) = &self.fast_reroute {
            len += obj.len();
        }
        if let Some(obj) = &self.detour {
            len += obj.len();
        }
        if let Some(obj) = &self.exclude_route {
            len += obj.len();
        }
        if let Some(obj) = &self.secondary_explicit_route {
            len += obj.len();
        }
        if let Some(obj) = &self.secondary_record_route {
            len += obj.len();
        }
        if let Some(obj) = &self.lsp_attributes {
            len += obj.len();
        }
        if let Some(obj) = &self.lsp_required_attributes {
            len += obj.len();
        }
        if let Some(obj) = &self.protection {
            len += obj.len();
        }
        if let Some(obj) = &self.association {
            len += obj.len();
        }
        if let Some(obj) = &self.primary_path_route {
            len += obj.len();
        }
        if let Some(obj) = &self.admin_status {
            len += obj.len();
        }
        if let Some(obj) = &self.bandwidth {
            len += obj.len();
        }
        if let Some(obj) = &self.metric {
            len += obj.len();
        }
        len
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), RsvpTeWritingError> {
        write_tlv_header_t16_l16(writer, Self::TLV_TYPE, self.len() as u16)?;
        if let Some(obj) = &self.sender_tspec {
            obj.write(writer)?;
        }
        if let Some(obj) = &self.flow_spec {
            obj.write(writer)?;
        }
        if let Some(obj) = &self.session_attribute {
            obj.write(writer)?;
        }
        if let Some(obj) = &self.explicit_route {
            obj.write(writer)?;
        }
        if let Some(obj) = &self.record_route {
            obj.write(writer)?;
        }
        if let Some(obj) = &self.fast_reroute {
            obj.write(writer)?;
        }
        if let Some(obj) = &self.detour {
            obj.write(writer)?;
        }
        if let Some(obj) = &self.exclude_route {
            obj.write(writer)?;
        }
        if let Some(obj) = &self.secondary_explicit_route {
            obj.write(writer)?;
        }
        if let Some(obj) = &self.secondary_record_route {
            obj.write(writer)?;
        }
        if let Some(obj) = &self.lsp_attributes {
            obj.write(writer)?;
        }
        if let Some(obj) = &self.lsp_required_attributes {
            obj.write(writer)?;
        }
        if let Some(obj) = &self.protection {
            obj.write(writer)?;
        }
        if let Some(obj) = &self.association {
            obj.write(writer)?;
        }
        if let Some(obj) = &self.primary_path_route {
            obj.write(writer)?;
        }
        if let Some(obj) = &self.admin_status {
            obj.write(writer)?;
        }
        if let Some(obj) = &self.bandwidth {
            obj.write(writer)?;
        }
        if let Some(obj) = &self.metric {
            obj.write(writer)?;
        }
        Ok(())
    }
}

impl WritablePdu<RsvpTeWritingError> for RsvpTeObject {
    const BASE_LENGTH: usize = OBJECT_HEADER_LEN;

    fn len(&self) -> usize {
        match self {
            Self::SenderTspec(obj) => obj.len(),
            Self::FlowSpec(obj) => obj.len(),
            Self::SessionAttribute(obj) => obj.len(),
            Self::ExplicitRoute(obj) => obj.len(),
            Self::RecordRoute(obj) => obj.len(),
            Self::FastReroute(obj) => obj.len(),
            Self::Detour(obj) => obj.len(),
            Self::ExcludeRoute(obj) => obj.len(),
            Self::SecondaryExplicitRoute(obj) => obj.len(),
            Self::SecondaryRecordRoute(obj) => obj.len(),
            Self::LspAttributes(obj) => obj.len(),
            Self::LspRequiredAttributes(obj) => obj.len(),
            Self::Protection(obj) => obj.len(),
            Self::Association(obj) => obj.len(),
            Self::PrimaryPathRoute(obj) => obj.len(),
            Self::AdminStatus(obj) => obj.len(),
            Self::Bandwidth(obj) => obj.len(),
            Self::Metric(obj) => obj.len(),
        }
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), RsvpTeWritingError> {
        match self {
            Self::SenderTspec(obj) => obj.write(writer),
            Self::FlowSpec(obj) => obj.write(writer),
            Self::SessionAttribute(obj) => obj.write(writer),
            Self::ExplicitRoute(obj) => obj.write(writer),
            Self::RecordRoute(obj) => obj.write(writer),
            Self::FastReroute(obj) => obj.write(writer),
            Self::Detour(obj) => obj.write(writer),
            Self::ExcludeRoute(obj) => obj.write(writer),
            Self::SecondaryExplicitRoute(obj) => obj.write(writer),
            Self::SecondaryRecordRoute(obj) => obj.write(writer),
            Self::LspAttributes(obj) => obj.write(writer),
            Self::LspRequiredAttributes(obj) => obj.write(writer),
            Self::Protection(obj) => obj.write(writer),
            Self::Association(obj) => obj.write(writer),
            Self::PrimaryPathRoute(obj) => obj.write(writer),
            Self::AdminStatus(obj) => obj.write(writer),
            Self::Bandwidth(obj) => obj.write(writer),
            Self::Metric(obj) => obj.write(writer),
        }
    }
}

fn write_tspec_parameters<T: Write>(
    writer: &mut T,
    tspec: &TspecParameters,
) -> Result<(), RsvpTeWritingError> {
    writer.write_f32::<NetworkEndian>(tspec.token_bucket_rate)?;
    writer.write_f32::<NetworkEndian>(tspec.token_bucket_size)?;
    writer.write_f32::<NetworkEndian>(tspec.peak_data_rate)?;
    writer.write_u32::<NetworkEndian>(tspec.minimum_policed_unit)?;
    writer.write_u32::<NetworkEndian>(tspec.maximum_packet_size)?;
    Ok(())
}

/// token bucket parameter header shared by Sender-Tspec and Flow-Spec:
/// parameter 127, flags 0, length 5 words
const TOKEN_BUCKET_PARAMETER_HEADER: u32 = 0x7f00_0005;

impl WritablePdu<RsvpTeWritingError> for SenderTspecObject {
    const BASE_LENGTH: usize = OBJECT_HEADER_LEN;

    fn len(&self) -> usize {
        // three header words plus the token bucket parameters
        Self::BASE_LENGTH + 12 + 20
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), RsvpTeWritingError> {
        write_object_header(
            writer,
            self.len() - Self::BASE_LENGTH,
            Self::CLASS_NUM,
            Self::C_TYPE,
        )?;
        // message header: format 0, length 7 words
        writer.write_u32::<NetworkEndian>(0x0000_0007)?;
        // service header: generic service 1, data length 6 words
        writer.write_u32::<NetworkEndian>(0x0100_0006)?;
        writer.write_u32::<NetworkEndian>(TOKEN_BUCKET_PARAMETER_HEADER)?;
        write_tspec_parameters(writer, &self.0)
    }
}

impl WritablePdu<RsvpTeWritingError> for FlowSpecObject {
    const BASE_LENGTH: usize = OBJECT_HEADER_LEN;

    fn len(&self) -> usize {
        Self::BASE_LENGTH
            + match self {
                Self::ControlledLoad { .. } => 12 + 20,
                Self::Guaranteed { .. } => 12 + 20 + 12,
            }
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), RsvpTeWritingError> {
        write_object_header(
            writer,
            self.len() - Self::BASE_LENGTH,
            Self::CLASS_NUM,
            Self::C_TYPE,
        )?;
        let (message_words, service_words) = match self {
            Self::ControlledLoad { .. } => (7u32, 6u16),
            Self::Guaranteed { .. } => (10u32, 9u16),
        };
        writer.write_u32::<NetworkEndian>(message_words)?;
        writer.write_u8(self.service())?;
        writer.write_u8(0)?;
        writer.write_u16::<NetworkEndian>(service_words)?;
        writer.write_u32::<NetworkEndian>(TOKEN_BUCKET_PARAMETER_HEADER)?;
        match self {
            Self::ControlledLoad { tspec } => write_tspec_parameters(writer, tspec),
            Self::Guaranteed {
                tspec,
                rate,
                slack_term,
            } => {
                write_tspec_parameters(writer, tspec)?;
                // guaranteed service parameter header: parameter 130,
                // flags 0, length 2 words
                writer.write_u32::<NetworkEndian>(0x8200_0002)?;
                writer.write_f32::<NetworkEndian>(*rate)?;
                writer.write_u32::<NetworkEndian>(*slack_term)?;
                Ok(())
            }
        }
    }
}

/// Session names are NUL padded to a four octet boundary; the name length
/// octet counts the padding.
fn padded_session_name_len(session_name: &str) -> usize {
    session_name.len().div_ceil(4) * 4
}

fn write_session_attribute_tail<T: Write>(
    writer: &mut T,
    setup_priority: u8,
    holding_priority: u8,
    flags: u8,
    session_name: &str,
) -> Result<(), RsvpTeWritingError> {
    let padded = padded_session_name_len(session_name);
    writer.write_u8(setup_priority)?;
    writer.write_u8(holding_priority)?;
    writer.write_u8(flags)?;
    writer.write_u8(padded as u8)?;
    writer.write_all(session_name.as_bytes())?;
    for _ in session_name.len()..padded {
        writer.write_u8(0)?;
    }
    Ok(())
}

impl WritablePdu<RsvpTeWritingError> for SessionAttributeObject {
    const BASE_LENGTH: usize = OBJECT_HEADER_LEN;

    fn len(&self) -> usize {
        Self::BASE_LENGTH
            + match self {
                Self::WithResourceAffinities { session_name, .. } => {
                    12 + 4 + padded_session_name_len(session_name)
                }
                Self::Basic { session_name, .. } => 4 + padded_session_name_len(session_name),
            }
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), RsvpTeWritingError> {
        write_object_header(
            writer,
            self.len() - Self::BASE_LENGTH,
            Self::CLASS_NUM,
            self.c_type(),
        )?;
        match self {
            Self::WithResourceAffinities {
                exclude_any,
                include_any,
                include_all,
                setup_priority,
                holding_priority,
                flags,
                session_name,
            } => {
                writer.write_u32::<NetworkEndian>(*exclude_any)?;
                writer.write_u32::<NetworkEndian>(*include_any)?;
                writer.write_u32::<NetworkEndian>(*include_all)?;
                write_session_attribute_tail(
                    writer,
                    *setup_priority,
                    *holding_priority,
                    *flags,
                    session_name,
                )
            }
            Self::Basic {
                setup_priority,
                holding_priority,
                flags,
                session_name,
            } => write_session_attribute_tail(
                writer,
                *setup_priority,
                *holding_priority,
                *flags,
                session_name,
            ),
        }
    }
}

impl WritablePdu<RsvpTeWritingError> for ProtectionBody {
    const BASE_LENGTH: usize = 4;

    fn len(&self) -> usize {
        match self {
            Self::Type1 { .. } => 4,
            Self::Type2 { .. } => 8,
        }
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), RsvpTeWritingError> {
        match self {
            Self::Type1 {
                secondary,
                link_flags,
            } => {
                writer.write_u8(if *secondary { 0x80 } else { 0x00 })?;
                writer.write_u16::<NetworkEndian>(0)?;
                writer.write_u8(*link_flags)?;
            }
            Self::Type2 {
                secondary,
                protecting,
                notification,
                operational,
                lsp_flags,
                link_flags,
                in_place,
                required,
                seg_flags,
            } => {
                let mut flags = 0;
                if *secondary {
                    flags |= 0x80;
                }
                if *protecting {
                    flags |= 0x40;
                }
                if *notification {
                    flags |= 0x20;
                }
                if *operational {
                    flags |= 0x10;
                }
                writer.write_u8(flags)?;
                writer.write_u8(*lsp_flags)?;
                writer.write_u8(0)?;
                writer.write_u8(*link_flags)?;
                let mut seg_byte = 0;
                if *in_place {
                    seg_byte |= 0x80;
                }
                if *required {
                    seg_byte |= 0x40;
                }
                writer.write_u8(seg_byte)?;
                writer.write_u8(*seg_flags)?;
                writer.write_u16::<NetworkEndian>(0)?;
            }
        }
        Ok(())
    }
}

impl WritablePdu<RsvpTeWritingError> for RouteSubobject {
    // type octet and length octet
    const BASE_LENGTH: usize = 2;

    fn len(&self) -> usize {
        Self::BASE_LENGTH
            + match self {
                Self::Ipv4Prefix { .. } => 6,
                Self::Ipv6Prefix { .. } => 18,
                Self::Label { .. } => 6,
                Self::UnnumberedInterface { .. } => 10,
                Self::AsNumber { .. } => 2,
                Self::Srlg { .. } => 6,
                Self::Protection { body, .. } => 2 + body.len(),
            }
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), RsvpTeWritingError> {
        let mut type_octet = self.raw_type();
        if self.loose() {
            type_octet |= Self::LOOSE_BIT;
        }
        writer.write_u8(type_octet)?;
        writer.write_u8(self.len() as u8)?;
        match self {
            Self::Ipv4Prefix {
                prefix, attributes, ..
            } => {
                writer.write_all(&prefix.addr().octets())?;
                writer.write_u8(prefix.prefix_len())?;
                writer.write_u8(*attributes)?;
            }
            Self::Ipv6Prefix {
                prefix, attributes, ..
            } => {
                writer.write_all(&prefix.addr().octets())?;
                writer.write_u8(prefix.prefix_len())?;
                writer.write_u8(*attributes)?;
            }
            Self::Label {
                flags,
                c_type,
                label,
                ..
            } => {
                writer.write_u8(*flags)?;
                writer.write_u8(*c_type)?;
                writer.write_u32::<NetworkEndian>(*label)?;
            }
            Self::UnnumberedInterface {
                attributes,
                router_id,
                interface_id,
                ..
            } => {
                writer.write_u8(*attributes)?;
                writer.write_u8(0)?;
                writer.write_all(&router_id.octets())?;
                writer.write_u32::<NetworkEndian>(*interface_id)?;
            }
            Self::AsNumber { asn, .. } => {
                writer.write_u16::<NetworkEndian>(*asn)?;
            }
            Self::Srlg {
                srlg_id,
                attributes,
                ..
            } => {
                writer.write_u32::<NetworkEndian>(*srlg_id)?;
                writer.write_u8(0)?;
                writer.write_u8(*attributes)?;
            }
            Self::Protection { body, .. } => {
                writer.write_u8(0)?;
                writer.write_u8(body.c_type())?;
                body.write(writer)?;
            }
        }
        Ok(())
    }
}

fn route_subobjects_len(subobjects: &[RouteSubobject]) -> usize {
    subobjects.iter().map(|subobject| subobject.len()).sum()
}

fn write_route_subobjects<T: Write>(
    writer: &mut T,
    subobjects: &[RouteSubobject],
) -> Result<(), RsvpTeWritingError> {
    for subobject in subobjects {
        subobject.write(writer)?;
    }
    Ok(())
}

macro_rules! route_object_writable {
    ($object:ty) => {
        impl WritablePdu<RsvpTeWritingError> for $object {
            const BASE_LENGTH: usize = OBJECT_HEADER_LEN;

            fn len(&self) -> usize {
                Self::BASE_LENGTH + route_subobjects_len(&self.subobjects)
            }

            fn write<T: Write>(&self, writer: &mut T) -> Result<(), RsvpTeWritingError> {
                write_object_header(
                    writer,
                    self.len() - Self::BASE_LENGTH,
                    Self::CLASS_NUM,
                    Self::C_TYPE,
                )?;
                write_route_subobjects(writer, &self.subobjects)
            }
        }
    };
}

route_object_writable!(ExplicitRouteObject);
route_object_writable!(RecordRouteObject);
route_object_writable!(ExcludeRouteObject);
route_object_writable!(PrimaryPathRouteObject);
route_object_writable!(SecondaryExplicitRouteObject);
route_object_writable!(SecondaryRecordRouteObject);

impl WritablePdu<RsvpTeWritingError> for FastRerouteObject {
    const BASE_LENGTH: usize = OBJECT_HEADER_LEN;

    fn len(&self) -> usize {
        Self::BASE_LENGTH
            + match self {
                Self::Type1 { .. } => 20,
                Self::Legacy { .. } => 16,
            }
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), RsvpTeWritingError> {
        write_object_header(
            writer,
            self.len() - Self::BASE_LENGTH,
            Self::CLASS_NUM,
            self.c_type(),
        )?;
        match self {
            Self::Type1 {
                setup_priority,
                holding_priority,
                hop_limit,
                flags,
                bandwidth,
                include_any,
                exclude_any,
                include_all,
            } => {
                writer.write_u8(*setup_priority)?;
                writer.write_u8(*holding_priority)?;
                writer.write_u8(*hop_limit)?;
                writer.write_u8(*flags)?;
                writer.write_f32::<NetworkEndian>(*bandwidth)?;
                writer.write_u32::<NetworkEndian>(*include_any)?;
                writer.write_u32::<NetworkEndian>(*exclude_any)?;
                writer.write_u32::<NetworkEndian>(*include_all)?;
            }
            Self::Legacy {
                setup_priority,
                holding_priority,
                hop_limit,
                bandwidth,
                include_any,
                exclude_any,
            } => {
                writer.write_u8(*setup_priority)?;
                writer.write_u8(*holding_priority)?;
                writer.write_u8(*hop_limit)?;
                writer.write_u8(0)?;
                writer.write_f32::<NetworkEndian>(*bandwidth)?;
                writer.write_u32::<NetworkEndian>(*include_any)?;
                writer.write_u32::<NetworkEndian>(*exclude_any)?;
            }
        }
        Ok(())
    }
}

impl WritablePdu<RsvpTeWritingError> for DetourObject {
    const BASE_LENGTH: usize = OBJECT_HEADER_LEN;

    fn len(&self) -> usize {
        Self::BASE_LENGTH
            + match self {
                Self::Ipv4(entries) => 8 * entries.len(),
                Self::Ipv6(entries) => 32 * entries.len(),
            }
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), RsvpTeWritingError> {
        write_object_header(
            writer,
            self.len() - Self::BASE_LENGTH,
            Self::CLASS_NUM,
            self.c_type(),
        )?;
        match self {
            Self::Ipv4(entries) => {
                for entry in entries {
                    writer.write_all(&entry.plr_id.octets())?;
                    writer.write_all(&entry.avoid_node_id.octets())?;
                }
            }
            Self::Ipv6(entries) => {
                for entry in entries {
                    writer.write_all(&entry.plr_id.octets())?;
                    writer.write_all(&entry.avoid_node_id.octets())?;
                }
            }
        }
        Ok(())
    }
}

impl WritablePdu<RsvpTeWritingError> for AttributesSubTlv {
    // code and length
    const BASE_LENGTH: usize = 4;

    fn len(&self) -> usize {
        let padding = (4 - self.value.len() % 4) % 4;
        Self::BASE_LENGTH + self.value.len() + padding
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), RsvpTeWritingError> {
        writer.write_u16::<NetworkEndian>(self.code)?;
        // the length field counts the value only, padding excluded
        writer.write_u16::<NetworkEndian>(self.value.len() as u16)?;
        writer.write_all(&self.value)?;
        let padding = (4 - self.value.len() % 4) % 4;
        for _ in 0..padding {
            writer.write_u8(0)?;
        }
        Ok(())
    }
}

macro_rules! lsp_attributes_writable {
    ($object:ty) => {
        impl WritablePdu<RsvpTeWritingError> for $object {
            const BASE_LENGTH: usize = OBJECT_HEADER_LEN;

            fn len(&self) -> usize {
                Self::BASE_LENGTH
                    + self
                        .subobjects
                        .iter()
                        .map(|subobject| subobject.len())
                        .sum::<usize>()
            }

            fn write<T: Write>(&self, writer: &mut T) -> Result<(), RsvpTeWritingError> {
                write_object_header(
                    writer,
                    self.len() - Self::BASE_LENGTH,
                    Self::CLASS_NUM,
                    Self::C_TYPE,
                )?;
                for subobject in &self.subobjects {
                    subobject.write(writer)?;
                }
                Ok(())
            }
        }
    };
}

lsp_attributes_writable!(LspAttributesObject);
lsp_attributes_writable!(LspRequiredAttributesObject);

impl WritablePdu<RsvpTeWritingError> for ProtectionObject {
    const BASE_LENGTH: usize = OBJECT_HEADER_LEN;

    fn len(&self) -> usize {
        Self::BASE_LENGTH + self.body.len()
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), RsvpTeWritingError> {
        write_object_header(
            writer,
            self.len() - Self::BASE_LENGTH,
            Self::CLASS_NUM,
            self.body.c_type(),
        )?;
        self.body.write(writer)
    }
}

impl WritablePdu<RsvpTeWritingError> for AssociationObject {
    const BASE_LENGTH: usize = OBJECT_HEADER_LEN;

    fn len(&self) -> usize {
        Self::BASE_LENGTH
            + match self {
                Self::Ipv4 { .. } => 8,
                Self::Ipv6 { .. } => 20,
            }
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), RsvpTeWritingError> {
        write_object_header(
            writer,
            self.len() - Self::BASE_LENGTH,
            Self::CLASS_NUM,
            self.c_type(),
        )?;
        match self {
            Self::Ipv4 {
                association_type,
                association_id,
                source,
            } => {
                writer.write_u16::<NetworkEndian>(*association_type)?;
                writer.write_u16::<NetworkEndian>(*association_id)?;
                writer.write_all(&source.octets())?;
            }
            Self::Ipv6 {
                association_type,
                association_id,
                source,
            } => {
                writer.write_u16::<NetworkEndian>(*association_type)?;
                writer.write_u16::<NetworkEndian>(*association_id)?;
                writer.write_all(&source.octets())?;
            }
        }
        Ok(())
    }
}

impl WritablePdu<RsvpTeWritingError> for AdminStatusObject {
    const BASE_LENGTH: usize = OBJECT_HEADER_LEN;

    fn len(&self) -> usize {
        Self::BASE_LENGTH + 4
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), RsvpTeWritingError> {
        write_object_header(
            writer,
            self.len() - Self::BASE_LENGTH,
            Self::CLASS_NUM,
            Self::C_TYPE,
        )?;
        writer.write_u8(if self.reflect { 0x80 } else { 0x00 })?;
        writer.write_u16::<NetworkEndian>(0)?;
        let mut status = 0;
        if self.testing {
            status |= 0x04;
        }
        if self.administratively_down {
            status |= 0x02;
        }
        if self.deleting {
            status |= 0x01;
        }
        writer.write_u8(status)?;
        Ok(())
    }
}

impl WritablePdu<RsvpTeWritingError> for BandwidthObject {
    const BASE_LENGTH: usize = OBJECT_HEADER_LEN;

    fn len(&self) -> usize {
        Self::BASE_LENGTH + 4
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), RsvpTeWritingError> {
        write_object_header(
            writer,
            self.len() - Self::BASE_LENGTH,
            Self::CLASS_NUM,
            self.c_type(),
        )?;
        let bandwidth = match self {
            Self::Basic(bandwidth) | Self::Reoptimization(bandwidth) => *bandwidth,
        };
        writer.write_f32::<NetworkEndian>(bandwidth)?;
        Ok(())
    }
}

impl WritablePdu<RsvpTeWritingError> for MetricObject {
    const BASE_LENGTH: usize = OBJECT_HEADER_LEN;

    fn len(&self) -> usize {
        Self::BASE_LENGTH + 8
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), RsvpTeWritingError> {
        write_object_header(
            writer,
            self.len() - Self::BASE_LENGTH,
            Self::CLASS_NUM,
            Self::C_TYPE,
        )?;
        writer.write_u16::<NetworkEndian>(0)?;
        let mut flags = 0;
        if self.bound {
            flags |= 0x01;
        }
        if self.computed {
            flags |= 0x02;
        }
        writer.write_u8(flags)?;
        writer.write_u8(self.metric_type)?;
        writer.write_u32::<NetworkEndian>(self.value)?;
        Ok(())
    }
}
