use crate::domain::{Member, value_objects::MemberId};
use crate::ports::{
    errors::{Result, StoreError},
    id_generator::IdGenerator,
    roster::Roster as RosterTrait,
};
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::sync::Arc;

/// Rosterのインメモリ実装
pub struct Roster {
    ids: Arc<dyn IdGenerator>,
    members: IndexMap<MemberId, Member>,
}

impl Roster {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            ids,
            members: IndexMap::new(),
        }
    }
}

impl RosterTrait for Roster {
    fn register(&mut self, name: &str, email: &str, joined_date: NaiveDate) -> MemberId {
        let member = Member::new(self.ids.next_member_id(), name, email, joined_date);
        let id = member.id.clone();
        self.members.insert(id.clone(), member);
        id
    }

    fn get(&self, id: &MemberId) -> Option<Member> {
        self.members.get(id).cloned()
    }

    fn is_active(&self, id: &MemberId) -> Result<bool> {
        self.members
            .get(id)
            .map(|member| member.active)
            .ok_or_else(|| StoreError::MemberNotFound(id.clone()))
    }

    fn set_active(&mut self, id: &MemberId, active: bool) -> Result<()> {
        let member = self
            .members
            .get_mut(id)
            .ok_or_else(|| StoreError::MemberNotFound(id.clone()))?;
        member.active = active;
        Ok(())
    }

    fn len(&self) -> usize {
        self.members.len()
    }
}
