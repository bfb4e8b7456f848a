//! Locally cached member list
//!
//! The permission engine always decides against whatever directory the
//! caller currently holds; it never waits for a fresher one.

use crate::core::models::Member;
use crate::utils::error::{OpsError, Result};
use std::collections::HashMap;

/// Ordered member list with an ID index.
///
/// Iteration order is the order members were supplied in, which keeps
/// reviewer resolution deterministic.
#[derive(Debug, Clone, Default)]
pub struct MemberDirectory {
    members: Vec<Member>,
    index: HashMap<String, usize>,
}

impl MemberDirectory {
    /// Build a directory, rejecting blank or duplicate IDs
    pub fn new(members: Vec<Member>) -> Result<Self> {
        let mut index = HashMap::with_capacity(members.len());

        for (position, member) in members.iter().enumerate() {
            if member.id.trim().is_empty() {
                return Err(OpsError::validation(format!(
                    "Member '{}' has an empty id",
                    member.name
                )));
            }
            if index.insert(member.id.clone(), position).is_some() {
                return Err(OpsError::validation(format!(
                    "Duplicate member id: {}",
                    member.id
                )));
            }
        }

        Ok(Self { members, index })
    }

    pub fn get(&self, id: &str) -> Option<&Member> {
        self.index.get(id).map(|&position| &self.members[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// First member whose job title or name equals `text` (both trimmed)
    pub fn find_by_role_or_name(&self, text: &str) -> Option<&Member> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.members
            .iter()
            .find(|m| m.role.trim() == text || m.name.trim() == text)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }
}
