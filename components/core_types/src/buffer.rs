//! Binary buffer and view values.
//!
//! Buffer-like values are represented as a closed set of variants carrying
//! their own validated metadata (byte length, shared flag, resizable flag,
//! detached flag, realm). Classification happens once, when the value is
//! constructed; the conversions only inspect the metadata.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{ConversionError, ConversionResult};
use crate::realm::RealmId;

/// Maximum buffer size accepted by the allocating constructors (2GB - 1).
const MAX_BYTE_LENGTH: usize = 2_147_483_647;

#[derive(Debug)]
struct BufferData {
    data: Vec<u8>,
    shared: bool,
    resizable: bool,
    detached: bool,
    realm: RealmId,
}

/// A raw binary data buffer.
///
/// Covers both the plain and the shared-memory buffer brands; the `shared`
/// flag is the brand distinction. Storage is reference-counted so views on
/// the buffer observe a detach.
///
/// # Examples
///
/// ```
/// use core_types::BufferValue;
///
/// let buf = BufferValue::new(16);
/// assert_eq!(buf.byte_length(), 16);
/// assert!(!buf.is_shared());
///
/// buf.detach();
/// assert!(buf.is_detached());
/// assert_eq!(buf.byte_length(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct BufferValue {
    inner: Rc<RefCell<BufferData>>,
}

impl BufferValue {
    fn with_flags(byte_length: usize, shared: bool, resizable: bool) -> Self {
        BufferValue {
            inner: Rc::new(RefCell::new(BufferData {
                data: vec![0u8; byte_length],
                shared,
                resizable,
                detached: false,
                realm: RealmId::default(),
            })),
        }
    }

    /// Create a plain fixed-length buffer in the default realm.
    pub fn new(byte_length: usize) -> Self {
        BufferValue::with_flags(byte_length, false, false)
    }

    /// Create a shared-memory buffer.
    pub fn new_shared(byte_length: usize) -> Self {
        BufferValue::with_flags(byte_length, true, false)
    }

    /// Create a resizable buffer (growable when shared).
    pub fn new_resizable(byte_length: usize) -> Self {
        BufferValue::with_flags(byte_length, false, true)
    }

    /// Create a growable shared-memory buffer.
    pub fn new_shared_growable(byte_length: usize) -> Self {
        BufferValue::with_flags(byte_length, true, true)
    }

    /// Fallible constructor enforcing the maximum buffer size.
    pub fn try_new(byte_length: usize) -> ConversionResult<Self> {
        if byte_length > MAX_BYTE_LENGTH {
            return Err(ConversionError::range_error("invalid buffer length"));
        }
        Ok(BufferValue::new(byte_length))
    }

    /// Move the buffer into the given realm.
    pub fn in_realm(self, realm: RealmId) -> Self {
        self.inner.borrow_mut().realm = realm;
        self
    }

    /// Byte length of the buffer; zero once detached.
    pub fn byte_length(&self) -> usize {
        self.inner.borrow().data.len()
    }

    /// Whether this is a shared-memory buffer.
    pub fn is_shared(&self) -> bool {
        self.inner.borrow().shared
    }

    /// Whether the buffer can change size after creation.
    pub fn is_resizable(&self) -> bool {
        self.inner.borrow().resizable
    }

    /// Whether the backing memory has been released.
    pub fn is_detached(&self) -> bool {
        self.inner.borrow().detached
    }

    /// The realm that created this buffer.
    pub fn realm(&self) -> RealmId {
        self.inner.borrow().realm
    }

    /// Release the backing memory.
    ///
    /// Views over the buffer observe the detach through their shared handle.
    pub fn detach(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.data = Vec::new();
        inner.detached = true;
    }

    /// Whether two values are the same buffer object.
    pub fn ptr_eq(&self, other: &BufferValue) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for BufferValue {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// Typed-array element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypedArrayKind {
    /// 8-bit signed integer
    Int8,
    /// 8-bit unsigned integer
    Uint8,
    /// 8-bit unsigned integer (clamped)
    Uint8Clamped,
    /// 16-bit signed integer
    Int16,
    /// 16-bit unsigned integer
    Uint16,
    /// 32-bit signed integer
    Int32,
    /// 32-bit unsigned integer
    Uint32,
    /// 32-bit floating point
    Float32,
    /// 64-bit floating point
    Float64,
}

impl TypedArrayKind {
    /// Get the byte size of each element for this kind.
    pub fn bytes_per_element(&self) -> usize {
        match self {
            TypedArrayKind::Int8 | TypedArrayKind::Uint8 | TypedArrayKind::Uint8Clamped => 1,
            TypedArrayKind::Int16 | TypedArrayKind::Uint16 => 2,
            TypedArrayKind::Int32 | TypedArrayKind::Uint32 | TypedArrayKind::Float32 => 4,
            TypedArrayKind::Float64 => 8,
        }
    }

    /// Get the constructor name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            TypedArrayKind::Int8 => "Int8Array",
            TypedArrayKind::Uint8 => "Uint8Array",
            TypedArrayKind::Uint8Clamped => "Uint8ClampedArray",
            TypedArrayKind::Int16 => "Int16Array",
            TypedArrayKind::Uint16 => "Uint16Array",
            TypedArrayKind::Int32 => "Int32Array",
            TypedArrayKind::Uint32 => "Uint32Array",
            TypedArrayKind::Float32 => "Float32Array",
            TypedArrayKind::Float64 => "Float64Array",
        }
    }
}

/// The brand of a view over a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// A DataView
    DataView,
    /// A typed array of the given element kind
    TypedArray(TypedArrayKind),
}

impl ViewKind {
    /// Get the constructor name of this view brand.
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::DataView => "DataView",
            ViewKind::TypedArray(kind) => kind.name(),
        }
    }
}

/// A view over a buffer: a typed array or a DataView.
#[derive(Debug, Clone)]
pub struct ViewValue {
    buffer: BufferValue,
    kind: ViewKind,
    byte_offset: usize,
    byte_length: usize,
    realm: RealmId,
}

impl ViewValue {
    /// Create a typed array over a fresh plain buffer.
    pub fn new_typed(kind: TypedArrayKind, length: usize) -> Self {
        let byte_length = length * kind.bytes_per_element();
        let buffer = BufferValue::new(byte_length);
        let realm = buffer.realm();
        ViewValue {
            buffer,
            kind: ViewKind::TypedArray(kind),
            byte_offset: 0,
            byte_length,
            realm,
        }
    }

    /// Create a typed array over an existing buffer.
    ///
    /// The offset must be element-aligned and the view must fit within the
    /// buffer. `length` is in elements; `None` covers the remainder of the
    /// buffer.
    pub fn typed_from_buffer(
        kind: TypedArrayKind,
        buffer: BufferValue,
        byte_offset: usize,
        length: Option<usize>,
    ) -> ConversionResult<Self> {
        let elem_size = kind.bytes_per_element();

        if byte_offset % elem_size != 0 {
            return Err(ConversionError::range_error(format!(
                "byte offset {} is not aligned to element size {}",
                byte_offset, elem_size
            )));
        }

        let buf_len = buffer.byte_length();
        if byte_offset > buf_len {
            return Err(ConversionError::range_error("byte offset out of range"));
        }

        let available = buf_len - byte_offset;
        let byte_length = match length {
            Some(len) => {
                let needed = len * elem_size;
                if needed > available {
                    return Err(ConversionError::range_error("length out of range"));
                }
                needed
            }
            None => {
                if available % elem_size != 0 {
                    return Err(ConversionError::range_error(
                        "buffer byte length is not aligned to element size",
                    ));
                }
                available
            }
        };

        let realm = buffer.realm();
        Ok(ViewValue {
            buffer,
            kind: ViewKind::TypedArray(kind),
            byte_offset,
            byte_length,
            realm,
        })
    }

    /// Create a DataView over an existing buffer.
    pub fn data_view(
        buffer: BufferValue,
        byte_offset: usize,
        byte_length: Option<usize>,
    ) -> ConversionResult<Self> {
        let buf_len = buffer.byte_length();
        if byte_offset > buf_len {
            return Err(ConversionError::range_error("byte offset out of range"));
        }

        let available = buf_len - byte_offset;
        let byte_length = match byte_length {
            Some(len) => {
                if len > available {
                    return Err(ConversionError::range_error("byte length out of range"));
                }
                len
            }
            None => available,
        };

        let realm = buffer.realm();
        Ok(ViewValue {
            buffer,
            kind: ViewKind::DataView,
            byte_offset,
            byte_length,
            realm,
        })
    }

    /// Move the view into the given realm.
    ///
    /// The underlying buffer keeps its own realm.
    pub fn in_realm(mut self, realm: RealmId) -> Self {
        self.realm = realm;
        self
    }

    /// The buffer this view reads from.
    pub fn buffer(&self) -> &BufferValue {
        &self.buffer
    }

    /// The brand of this view.
    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    /// Byte offset into the buffer.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Byte length covered by the view.
    pub fn byte_length(&self) -> usize {
        self.byte_length
    }

    /// Number of elements for typed arrays; byte length for DataViews.
    pub fn length(&self) -> usize {
        match self.kind {
            ViewKind::DataView => self.byte_length,
            ViewKind::TypedArray(kind) => self.byte_length / kind.bytes_per_element(),
        }
    }

    /// The realm that created this view.
    pub fn realm(&self) -> RealmId {
        self.realm
    }
}

impl PartialEq for ViewValue {
    fn eq(&self, other: &Self) -> bool {
        self.buffer.ptr_eq(&other.buffer)
            && self.kind == other.kind
            && self.byte_offset == other.byte_offset
            && self.byte_length == other.byte_length
    }
}
