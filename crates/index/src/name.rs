//! Qualified names and the identities derived from them.

use std::fmt;
use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::config::{DEFAULT_ROOT_LABEL, IndexConfig};

/// Rejected qualified names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
	#[error("qualified name is empty")]
	Empty,
	#[error("qualified name {name:?} contains an empty segment")]
	EmptySegment { name: String },
}

/// A type name split into ordered namespace segments and a trailing leaf.
///
/// The original text is kept intact; segments are byte spans into it, so
/// namespace prefixes are borrowed slices rather than re-joined strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
	text: Box<str>,
	spans: Box<[(usize, usize)]>,
}

impl QualifiedName {
	/// Parses `raw`, splitting on `separator`.
	///
	/// Surrounding whitespace is ignored. An empty separator treats the whole
	/// text as a single leaf segment.
	pub fn parse(raw: &str, separator: &str) -> Result<Self, NameError> {
		let text = raw.trim();
		if text.is_empty() {
			return Err(NameError::Empty);
		}

		let spans = if separator.is_empty() {
			vec![(0, text.len())]
		} else {
			let mut spans = Vec::new();
			let mut start = 0;
			for piece in text.split(separator) {
				if piece.is_empty() {
					return Err(NameError::EmptySegment { name: text.to_owned() });
				}
				spans.push((start, start + piece.len()));
				start += piece.len() + separator.len();
			}
			spans
		};

		Ok(Self {
			text: Box::from(text),
			spans: spans.into_boxed_slice(),
		})
	}

	/// Returns the full qualified name.
	#[inline]
	pub fn as_str(&self) -> &str {
		&self.text
	}

	/// Returns the number of segments, leaf included. Always at least one.
	#[inline]
	pub fn len(&self) -> usize {
		self.spans.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.spans.is_empty()
	}

	/// Returns the segments in order, leaf last.
	pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
		self.spans.iter().map(|&(start, end)| &self.text[start..end])
	}

	/// Returns the unqualified leaf name.
	pub fn leaf(&self) -> &str {
		self.spans
			.last()
			.map_or(&*self.text, |&(start, end)| &self.text[start..end])
	}

	/// Returns the prefix made of the first `depth` segments.
	///
	/// `None` for `depth == 0` (the root) or when `depth` exceeds the segment count.
	pub fn prefix(&self, depth: usize) -> Option<&str> {
		let &(_, end) = self.spans.get(depth.checked_sub(1)?)?;
		Some(&self.text[..end])
	}

	/// Returns the immediate namespace prefix, or `None` for a bare identifier.
	pub fn namespace(&self) -> Option<&str> {
		self.prefix(self.len().saturating_sub(1))
	}
}

impl fmt::Display for QualifiedName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.text)
	}
}

/// Stable, collision-resistant key for a qualified name.
///
/// The first 128 bits of the SHA-256 digest of the name text. Independent of
/// process, build and load order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeKey(u128);

impl TypeKey {
	pub fn of(name: &str) -> Self {
		let digest = Sha256::digest(name.as_bytes());
		let mut bytes = [0u8; 16];
		bytes.copy_from_slice(&digest[..16]);
		Self(u128::from_be_bytes(bytes))
	}

	#[inline]
	pub fn as_u128(self) -> u128 {
		self.0
	}
}

impl fmt::Display for TypeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:032x}", self.0)
	}
}

impl fmt::Debug for TypeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TypeKey({self})")
	}
}

/// A known type: its qualified name plus the key it is indexed under.
///
/// Equality and hashing go through [`TypeKey`]. Clones share the name.
#[derive(Clone)]
pub struct TypeIdentity {
	name: Arc<QualifiedName>,
	key: TypeKey,
}

impl TypeIdentity {
	pub fn new(name: QualifiedName) -> Self {
		let key = TypeKey::of(name.as_str());
		Self {
			name: Arc::new(name),
			key,
		}
	}

	#[inline]
	pub fn name(&self) -> &QualifiedName {
		&self.name
	}

	#[inline]
	pub fn key(&self) -> TypeKey {
		self.key
	}

	#[inline]
	pub fn as_str(&self) -> &str {
		self.name.as_str()
	}
}

impl PartialEq for TypeIdentity {
	fn eq(&self, other: &Self) -> bool {
		self.key == other.key
	}
}

impl Eq for TypeIdentity {}

impl std::hash::Hash for TypeIdentity {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.key.hash(state);
	}
}

impl fmt::Debug for TypeIdentity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypeIdentity")
			.field("name", &self.as_str())
			.field("key", &self.key)
			.finish()
	}
}

impl fmt::Display for TypeIdentity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A grouping level in the namespace map.
///
/// The empty prefix is [`NamespaceKey::Root`]. Keeping root as its own variant
/// means a namespace literally named after the root label still gets its own
/// entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NamespaceKey {
	Root,
	Path(Box<str>),
}

impl NamespaceKey {
	/// Interprets a caller-supplied namespace string.
	///
	/// The empty string and the configured root label both mean root; anything
	/// else is taken as a literal prefix.
	pub fn parse(raw: &str, config: &IndexConfig) -> Self {
		let raw = raw.trim();
		if raw.is_empty() || raw == config.root_label {
			Self::Root
		} else {
			Self::Path(Box::from(raw))
		}
	}

	#[inline]
	pub fn is_root(&self) -> bool {
		matches!(self, Self::Root)
	}

	/// Returns the display label, substituting `root_label` for the root.
	pub fn label<'a>(&'a self, root_label: &'a str) -> &'a str {
		match self {
			Self::Root => root_label,
			Self::Path(path) => path,
		}
	}
}

impl fmt::Display for NamespaceKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label(DEFAULT_ROOT_LABEL))
	}
}

impl From<&str> for NamespaceKey {
	fn from(raw: &str) -> Self {
		Self::parse(raw, &IndexConfig::default())
	}
}
