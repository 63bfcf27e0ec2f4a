use crate::modules::clinic_tracking::adapters::outbound::directory::{
    CaseRef, ParticipantDirectory,
};
use crate::modules::clinic_tracking::core::participants::{
    ChildProfile, ParentProfile, TherapistProfile,
};
use anyhow::bail;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Records {
    children: HashMap<String, ChildProfile>,
    parents: HashMap<String, ParentProfile>,
    therapists: HashMap<String, TherapistProfile>,
    case_sessions: HashMap<String, CaseRef>,
    session_types: HashMap<String, String>,
}

#[derive(Default)]
pub struct InMemoryParticipantDirectory {
    records: RwLock<Records>,
    is_offline: bool,
}

impl InMemoryParticipantDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn insert_child(&self, child: ChildProfile) {
        self.records
            .write()
            .await
            .children
            .insert(child.id.clone(), child);
    }

    pub async fn insert_parent(&self, parent: ParentProfile) {
        self.records
            .write()
            .await
            .parents
            .insert(parent.id.clone(), parent);
    }

    pub async fn insert_therapist(&self, therapist: TherapistProfile) {
        self.records
            .write()
            .await
            .therapists
            .insert(therapist.id.clone(), therapist);
    }

    pub async fn insert_case_session(&self, case_session_id: impl Into<String>, case: CaseRef) {
        self.records
            .write()
            .await
            .case_sessions
            .insert(case_session_id.into(), case);
    }

    pub async fn insert_session_type(&self, id: impl Into<String>, name: impl Into<String>) {
        self.records
            .write()
            .await
            .session_types
            .insert(id.into(), name.into());
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            bail!("Participant directory offline");
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ParticipantDirectory for InMemoryParticipantDirectory {
    async fn child(&self, child_id: &str) -> anyhow::Result<Option<ChildProfile>> {
        self.ensure_online()?;
        Ok(self.records.read().await.children.get(child_id).cloned())
    }

    async fn parent(&self, parent_id: &str) -> anyhow::Result<Option<ParentProfile>> {
        self.ensure_online()?;
        Ok(self.records.read().await.parents.get(parent_id).cloned())
    }

    async fn therapist(&self, therapist_id: &str) -> anyhow::Result<Option<TherapistProfile>> {
        self.ensure_online()?;
        Ok(self
            .records
            .read()
            .await
            .therapists
            .get(therapist_id)
            .cloned())
    }

    async fn case_for_session(&self, case_session_id: &str) -> anyhow::Result<Option<CaseRef>> {
        self.ensure_online()?;
        Ok(self
            .records
            .read()
            .await
            .case_sessions
            .get(case_session_id)
            .cloned())
    }

    async fn session_type_name(&self, session_type_id: &str) -> anyhow::Result<Option<String>> {
        self.ensure_online()?;
        Ok(self
            .records
            .read()
            .await
            .session_types
            .get(session_type_id)
            .cloned())
    }
}
