//! Generic pack/unpack of instruction payloads driven by the layout registry.

use {
    crate::{
        config::{CodecConfig, TrailingBytes},
        layout::{
            layout_for, FieldKind, InstructionLayout, LayoutError, LayoutField,
            LENGTH_PREFIX_BYTES, OPCODE_BYTES,
        },
        pubkey::{Pubkey, PUBKEY_BYTES},
    },
    byteorder::{ByteOrder, LittleEndian},
    log::*,
    std::{collections::HashMap, convert::TryFrom},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Uint(u64),
    Pubkey(Pubkey),
    Bytes(Vec<u8>),
}

impl FieldValue {
    fn kind_name(&self) -> &'static str {
        match self {
            Self::Uint(_) => "unsigned integer",
            Self::Pubkey(_) => "pubkey",
            Self::Bytes(_) => "bytes",
        }
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<Pubkey> for FieldValue {
    fn from(value: Pubkey) -> Self {
        Self::Pubkey(value)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Bytes(value.as_bytes().to_vec())
    }
}

/// Field values keyed by layout field name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldValues(HashMap<&'static str, FieldValue>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &'static str, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.0.insert(name, value.into())
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn require(&self, name: &'static str) -> Result<&FieldValue, LayoutError> {
        self.get(name).ok_or_else(|| LayoutError::SchemaMismatch {
            field: name,
            reason: "missing value".to_string(),
        })
    }

    pub fn u64(&self, name: &'static str) -> Result<u64, LayoutError> {
        match self.require(name)? {
            FieldValue::Uint(value) => Ok(*value),
            other => Err(wrong_kind(name, "unsigned integer", other)),
        }
    }

    pub fn pubkey(&self, name: &'static str) -> Result<Pubkey, LayoutError> {
        match self.require(name)? {
            FieldValue::Pubkey(value) => Ok(*value),
            other => Err(wrong_kind(name, "pubkey", other)),
        }
    }

    pub fn bytes(&self, name: &'static str) -> Result<&[u8], LayoutError> {
        match self.require(name)? {
            FieldValue::Bytes(value) => Ok(value),
            other => Err(wrong_kind(name, "bytes", other)),
        }
    }

    /// A bytes field holding UTF-8 text.
    pub fn string(&self, name: &'static str) -> Result<String, LayoutError> {
        let bytes = self.bytes(name)?;
        String::from_utf8(bytes.to_vec()).map_err(|err| LayoutError::SchemaMismatch {
            field: name,
            reason: err.to_string(),
        })
    }
}

impl FromIterator<(&'static str, FieldValue)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (&'static str, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn wrong_kind(field: &'static str, expected: &str, found: &FieldValue) -> LayoutError {
    LayoutError::SchemaMismatch {
        field,
        reason: format!("expected {}, found {}", expected, found.kind_name()),
    }
}

/// Encode `values` under the layout registered for `opcode`.
pub fn encode(opcode: u32, values: &FieldValues) -> Result<Vec<u8>, LayoutError> {
    encode_layout(layout_for(opcode)?, values)
}

/// Encode `values` under an explicit layout.
pub fn encode_layout(
    layout: &InstructionLayout,
    values: &FieldValues,
) -> Result<Vec<u8>, LayoutError> {
    if let Some(extra) = values.names().find(|name| layout.field(name).is_none()) {
        return Err(LayoutError::SchemaMismatch {
            field: extra,
            reason: format!("not part of the `{}` layout", layout.name),
        });
    }

    let mut writer = Writer::with_capacity(layout.fixed_size().unwrap_or(OPCODE_BYTES));
    writer.put_uint(u64::from(layout.index()), OPCODE_BYTES);
    for field in layout.fields {
        writer.put_field(field, values.require(field.name)?)?;
    }

    let data = writer.into_inner();
    trace!(
        "encoded {} instruction: {} bytes",
        layout.name,
        data.len()
    );
    Ok(data)
}

/// Decode a payload, allowing trailing bytes.
pub fn decode(data: &[u8]) -> Result<(u32, FieldValues), LayoutError> {
    decode_with_config(data, &CodecConfig::default())
}

pub fn decode_with_config(
    data: &[u8],
    config: &CodecConfig,
) -> Result<(u32, FieldValues), LayoutError> {
    let mut reader = Reader::new(data);
    let opcode = LittleEndian::read_u32(reader.take("opcode", OPCODE_BYTES)?);
    let layout = layout_for(opcode).map_err(|err| {
        debug!("rejecting payload with unknown opcode {}", opcode);
        err
    })?;

    let values = layout
        .fields
        .iter()
        .map(|field| Ok((field.name, reader.take_field(field)?)))
        .collect::<Result<FieldValues, LayoutError>>()?;

    let remaining = reader.remaining();
    if remaining > 0 {
        match config.trailing_bytes {
            TrailingBytes::Allow => {
                trace!("ignoring {} trailing bytes after {}", remaining, layout.name)
            }
            TrailingBytes::Reject => {
                debug!("rejecting {} trailing bytes after {}", remaining, layout.name);
                return Err(LayoutError::TrailingBytes { remaining });
            }
        }
    }
    trace!("decoded {} instruction: {} bytes", layout.name, data.len());
    Ok((opcode, values))
}

struct Writer {
    data: Vec<u8>,
}

impl Writer {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Caller guarantees `value` fits in `width` bytes.
    fn put_uint(&mut self, value: u64, width: usize) {
        let mut buf = [0u8; 8];
        LittleEndian::write_uint(&mut buf, value, width);
        self.data.extend_from_slice(&buf[..width]);
    }

    fn put_field(&mut self, field: &LayoutField, value: &FieldValue) -> Result<(), LayoutError> {
        match (field.kind, value) {
            (FieldKind::Pubkey, FieldValue::Pubkey(pubkey)) => {
                self.data.extend_from_slice(pubkey.as_ref());
            }
            (FieldKind::Bytes, FieldValue::Bytes(bytes)) => {
                let len = u64::try_from(bytes.len()).map_err(|_| LayoutError::SchemaMismatch {
                    field: field.name,
                    reason: "length does not fit the length prefix".to_string(),
                })?;
                self.put_uint(len, LENGTH_PREFIX_BYTES);
                self.data.extend_from_slice(bytes);
            }
            (kind, FieldValue::Uint(n)) => match (kind.uint_width(), kind.max_value()) {
                (Some(width), Some(max)) if *n <= max => self.put_uint(*n, width),
                (Some(width), Some(_)) => {
                    return Err(LayoutError::SchemaMismatch {
                        field: field.name,
                        reason: format!("{} does not fit in {} bytes", n, width),
                    })
                }
                _ => return Err(wrong_kind(field.name, "pubkey or bytes", value)),
            },
            (kind, other) => {
                return Err(LayoutError::SchemaMismatch {
                    field: field.name,
                    reason: format!("expected {:?}, found {}", kind, other.kind_name()),
                })
            }
        }
        Ok(())
    }

    fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

struct Reader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    fn take(&mut self, field: &'static str, needed: usize) -> Result<&'a [u8], LayoutError> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(LayoutError::TruncatedData {
                field,
                needed,
                remaining,
            });
        }
        let data = self.data;
        let bytes = &data[self.position..self.position + needed];
        self.position += needed;
        Ok(bytes)
    }

    fn take_field(&mut self, field: &LayoutField) -> Result<FieldValue, LayoutError> {
        match field.kind {
            FieldKind::Pubkey => {
                let bytes = self.take(field.name, PUBKEY_BYTES)?;
                Pubkey::try_from(bytes)
                    .map(FieldValue::Pubkey)
                    .map_err(|err| LayoutError::SchemaMismatch {
                        field: field.name,
                        reason: err.to_string(),
                    })
            }
            FieldKind::Bytes => {
                let len = LittleEndian::read_u64(self.take(field.name, LENGTH_PREFIX_BYTES)?);
                let len = usize::try_from(len).unwrap_or(usize::MAX);
                Ok(FieldValue::Bytes(self.take(field.name, len)?.to_vec()))
            }
            FieldKind::U8 | FieldKind::U16 | FieldKind::U32 | FieldKind::U64 => {
                let width = field.kind.uint_width().unwrap_or(8);
                let bytes = self.take(field.name, width)?;
                Ok(FieldValue::Uint(LittleEndian::read_uint(bytes, width)))
            }
        }
    }
}
