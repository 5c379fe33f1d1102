//! Parameter path grammar.
//!
//! A path such as `object.key3.key1` or `list_of_objects[].key1` splits on `.` into
//! segments. A segment suffixed with `[]` addresses a list of objects: the segments that
//! follow it describe fields of each element. `users.*.name` is accepted as another
//! spelling of `users[].name`.

/// One `.`-delimited component of a parameter path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub name: String,
    /// Whether the following segments address fields of this segment's list elements
    pub is_list: bool,
}

/// A parsed parameter path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamPath {
    segments: Vec<Segment>,
}

/// Suffix appended to a node key to address its list elements.
pub const LIST_MARKER: &str = "[]";

/// Name of the top-level segment a leading `*` or `[]` stands for.
pub const ROOT_LIST_NAME: &str = "*";

impl ParamPath {
    /// Parses a raw path. Empty segments are skipped rather than rejected.
    ///
    /// A leading `*` (or bare `[]`) has no segment to mark as a list, so it is kept as a
    /// top-level segment named `*`; when further segments follow, they address fields of
    /// its elements.
    pub fn parse(raw: &str) -> Self {
        let mut segments: Vec<Segment> = Vec::new();
        let mut leading_star = false;

        for part in raw.split('.') {
            let mut name = part.trim();
            let mut is_list = false;
            while let Some(stripped) = name.strip_suffix(LIST_MARKER) {
                name = stripped;
                is_list = true;
            }

            let is_star = name == "*" || (name.is_empty() && is_list);
            if is_star && segments.is_empty() {
                segments.push(Segment {
                    name: ROOT_LIST_NAME.to_string(),
                    is_list,
                });
                leading_star = true;
                continue;
            }

            if name.is_empty() || is_star {
                // `a.*.b` and `a.[].b` both mark `a` as a list
                if is_star {
                    if let Some(last) = segments.last_mut() {
                        last.is_list = true;
                    }
                }
                continue;
            }

            segments.push(Segment {
                name: name.to_string(),
                is_list,
            });
        }

        if leading_star && segments.len() > 1 {
            segments[0].is_list = true;
        }

        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Canonical key of the node addressed by the first `len` segments.
    ///
    /// Every segment but the last keeps its `[]` marker, so `a[].b` and `a.*.b` share
    /// a key while `a.b` does not.
    pub fn node_key_at(&self, len: usize) -> String {
        let len = len.min(self.segments.len());
        let mut key = String::new();
        for (i, segment) in self.segments[..len].iter().enumerate() {
            if i > 0 {
                key.push('.');
            }
            key.push_str(&segment.name);
            if segment.is_list && i + 1 < len {
                key.push_str(LIST_MARKER);
            }
        }
        key
    }

    /// Canonical key of the node this whole path addresses.
    pub fn node_key(&self) -> String {
        self.node_key_at(self.segments.len())
    }

    /// Key of the container the node at `len` segments lives in.
    ///
    /// This is the parent's node key, plus `[]` when the parent segment is a list.
    /// Top-level nodes live in the root container, keyed by the empty string.
    pub fn container_key_at(&self, len: usize) -> String {
        let len = len.min(self.segments.len());
        if len <= 1 {
            return String::new();
        }
        let parent = &self.segments[len - 2];
        let mut key = self.node_key_at(len - 1);
        if parent.is_list {
            key.push_str(LIST_MARKER);
        }
        key
    }

    /// Node keys of every proper ancestor, outermost first.
    pub fn ancestor_keys(&self) -> Vec<String> {
        (1..self.segments.len()).map(|len| self.node_key_at(len)).collect()
    }
}

/// Joins a container key and a field name into the field's node key.
pub fn child_key(container: &str, field: &str) -> String {
    if container.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", container, field)
    }
}

/// Key of the container holding the list elements of `node_key`.
pub fn element_container_key(node_key: &str) -> String {
    format!("{}{}", node_key, LIST_MARKER)
}
