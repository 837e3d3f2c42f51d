//! User accounts: a fixed-bucket chained hash table.

use serde::{Deserialize, Serialize};

/// Number of bucket heads in the table.
pub const BUCKET_COUNT: usize = 50;

/// A login account. The credential is opaque: produced and verified by the
/// external hashing capability, never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub credential: String,
    pub admin: bool,
}

/// One node of a bucket's singly linked chain.
#[derive(Debug, Clone)]
struct UserNode {
    user: User,
    next: Option<Box<UserNode>>,
}

type Chain = Option<Box<UserNode>>;

/// Chained map from username to account with a fixed bucket count; chain
/// order is insertion order, most-recent-first.
///
/// The table itself accepts duplicate names (a newer entry shadows the
/// older one in lookups); keeping at most one node per username is the
/// caller's precondition, checked with [`UserTable::find`] before inserting.
#[derive(Debug, Clone)]
pub struct UserTable {
    buckets: Vec<Chain>,
    len: usize,
}

impl Default for UserTable {
    fn default() -> Self {
        Self::new()
    }
}

impl UserTable {
    pub fn new() -> Self {
        Self {
            buckets: vec![None; BUCKET_COUNT],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Push a new account at the head of its bucket chain.
    pub fn insert(&mut self, user: User) {
        let slot = &mut self.buckets[bucket_index(&user.name)];
        let next = slot.take();
        *slot = Some(Box::new(UserNode { user, next }));
        self.len += 1;
    }

    /// Walk the bucket chain for the account with this name. Expected O(1);
    /// O(chain length) in the worst case.
    pub fn find(&self, name: &str) -> Option<&User> {
        let mut cursor = self.buckets[bucket_index(name)].as_deref();
        while let Some(node) = cursor {
            if node.user.name == name {
                return Some(&node.user);
            }
            cursor = node.next.as_deref();
        }
        None
    }

    /// Splice out the account with this name, fixing the bucket head when it
    /// is the first node. Removing an absent name is a no-op returning
    /// `None`.
    pub fn remove(&mut self, name: &str) -> Option<User> {
        let slot = &mut self.buckets[bucket_index(name)];
        let (chain, removed) = remove_from(slot.take(), name);
        *slot = chain;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Replace the account stored under `name` with `user`, re-keyed under
    /// the new name: a removal followed by an insertion, never an in-place
    /// mutation. Any reference obtained before the edit is stale afterwards
    /// and must be re-fetched by name. When `name` is unknown, nothing is
    /// inserted and `None` is returned.
    pub fn edit(&mut self, name: &str, user: User) -> Option<User> {
        let previous = self.remove(name)?;
        self.insert(user);
        Some(previous)
    }

    /// All accounts, bucket order first, most-recent-first within a chain.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.buckets.iter().flat_map(|bucket| ChainIter {
            cursor: bucket.as_deref(),
        })
    }
}

fn remove_from(chain: Chain, name: &str) -> (Chain, Option<User>) {
    match chain {
        None => (None, None),
        Some(mut node) if node.user.name == name => (node.next.take(), Some(node.user)),
        Some(mut node) => {
            let (rest, removed) = remove_from(node.next.take(), name);
            node.next = rest;
            (Some(node), removed)
        }
    }
}

/// Polynomial rolling string hash (`h = h*101 + byte`, wrapping) reduced
/// modulo the fixed bucket count.
fn bucket_index(name: &str) -> usize {
    let mut hash: u64 = 0;
    for byte in name.bytes() {
        hash = hash.wrapping_mul(101).wrapping_add(u64::from(byte));
    }
    (hash % BUCKET_COUNT as u64) as usize
}

struct ChainIter<'a> {
    cursor: Option<&'a UserNode>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a User;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = node.next.as_deref();
        Some(&node.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User {
            name: name.to_string(),
            credential: format!("cred-{name}"),
            admin: false,
        }
    }

    #[test]
    fn delete_leaves_the_other_accounts_reachable() {
        let mut table = UserTable::new();
        table.insert(user("alice"));
        table.insert(user("bob"));
        table.insert(user("carol"));

        assert_eq!(table.remove("bob").map(|u| u.name), Some("bob".to_string()));
        assert!(table.find("bob").is_none());
        assert!(table.find("alice").is_some());
        assert!(table.find("carol").is_some());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn removing_an_absent_name_is_a_no_op() {
        let mut table = UserTable::new();
        table.insert(user("alice"));
        assert!(table.remove("mallory").is_none());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn find_returns_the_most_recent_insertion() {
        let mut table = UserTable::new();
        table.insert(user("alice"));
        let mut newer = user("alice");
        newer.admin = true;
        table.insert(newer);

        assert_eq!(table.find("alice").map(|u| u.admin), Some(true));
    }

    #[test]
    fn colliding_names_share_a_chain() {
        // "ab" and "ba" land in the same bucket under the rolling hash.
        assert_eq!(bucket_index("ab"), bucket_index("ba"));

        let mut table = UserTable::new();
        table.insert(user("ab"));
        table.insert(user("ba"));
        assert!(table.find("ab").is_some());
        assert!(table.find("ba").is_some());

        table.remove("ba");
        assert!(table.find("ab").is_some());
        assert!(table.find("ba").is_none());
    }

    #[test]
    fn splicing_the_chain_head_keeps_the_rest() {
        let mut table = UserTable::new();
        table.insert(user("ab"));
        table.insert(user("ba"));

        // "ba" was inserted last, so it is the chain head.
        table.remove("ba");
        assert!(table.find("ab").is_some());
    }

    #[test]
    fn edit_rekeys_and_invalidates_the_old_name() {
        let mut table = UserTable::new();
        table.insert(user("alice"));

        let renamed = user("alicia");
        let previous = table.edit("alice", renamed);
        assert_eq!(previous.map(|u| u.name), Some("alice".to_string()));
        assert!(table.find("alice").is_none());
        assert!(table.find("alicia").is_some());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn editing_an_unknown_name_inserts_nothing() {
        let mut table = UserTable::new();
        assert!(table.edit("ghost", user("ghost")).is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn iter_visits_every_account_once() {
        let mut table = UserTable::new();
        for name in ["alice", "bob", "carol", "ab", "ba"] {
            table.insert(user(name));
        }
        let mut names: Vec<&str> = table.iter().map(|u| u.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["ab", "alice", "ba", "bob", "carol"]);
    }
}
