// Participant fixture: two children (one reached through a case session),
// their parents, one therapist and one session type. See json/directory.json.

use crate::modules::clinic_tracking::adapters::outbound::directory::CaseRef;
use crate::modules::clinic_tracking::adapters::outbound::directory_in_memory::InMemoryParticipantDirectory;
use crate::modules::clinic_tracking::core::participants::{
    ChildProfile, ParentProfile, TherapistProfile,
};
use serde::Deserialize;
use std::fs;

#[derive(Deserialize)]
struct CaseSessionDto {
    case_session_id: String,
    case_id: String,
    child_id: String,
}

#[derive(Deserialize)]
struct SessionTypeDto {
    id: String,
    name: String,
}

#[derive(Deserialize)]
struct DirectoryDto {
    children: Vec<ChildProfile>,
    parents: Vec<ParentProfile>,
    therapists: Vec<TherapistProfile>,
    case_sessions: Vec<CaseSessionDto>,
    session_types: Vec<SessionTypeDto>,
}

pub async fn seeded_directory() -> InMemoryParticipantDirectory {
    let json_str = fs::read_to_string("./src/tests/fixtures/json/directory.json").unwrap();
    let dto: DirectoryDto = serde_json::from_str(&json_str).unwrap();

    let directory = InMemoryParticipantDirectory::new();
    for child in dto.children {
        directory.insert_child(child).await;
    }
    for parent in dto.parents {
        directory.insert_parent(parent).await;
    }
    for therapist in dto.therapists {
        directory.insert_therapist(therapist).await;
    }
    for session in dto.case_sessions {
        directory
            .insert_case_session(
                session.case_session_id,
                CaseRef {
                    case_id: session.case_id,
                    child_id: session.child_id,
                },
            )
            .await;
    }
    for session_type in dto.session_types {
        directory
            .insert_session_type(session_type.id, session_type.name)
            .await;
    }
    directory
}
