//! Testing utilities for the Scope workspace
//!
//! Shared fixtures: small and organization-sized hierarchies, users and
//! ready-made sessions.

#![allow(missing_docs)]

use scope_core::{ScopeConfig, ScopeSession, UserDirectory, UserProfile, UserRole, WorkspaceFile};
use scope_tree::{SpaceForest, SpaceIcon, SpaceNode};

/// `all` > `eng` > {`backend`, `frontend`}
pub fn scenario_forest() -> SpaceForest {
    SpaceForest::new(vec![SpaceNode::new("all", "All").with_child(
        SpaceNode::new("eng", "Engineering")
            .with_child(SpaceNode::new("backend", "Backend"))
            .with_child(SpaceNode::new("frontend", "Frontend")),
    )])
    .unwrap()
}

fn board(id: &str, name: &str) -> SpaceNode {
    SpaceNode::new(id, name).with_icon(SpaceIcon::Board)
}

fn folder(id: &str, name: &str) -> SpaceNode {
    SpaceNode::new(id, name).with_icon(SpaceIcon::Folder)
}

/// The demo organization: personal areas, an examples tree and test scenarios
pub fn organization_forest() -> SpaceForest {
    SpaceForest::new(vec![
        folder("personal", "Personal"),
        folder("favorites", "Favorites (1)"),
        folder("all-examples", "All examples").expanded(true).with_children(vec![
            folder("demo", "Demo mockups").with_children(vec![
                board("kanban-example", "Kanban example"),
                folder("project-mgmt", "Project management"),
                SpaceNode::new("workflow-example", "Workflow example").with_icon(SpaceIcon::Workflow),
                SpaceNode::new("dynamic-boards", "Dynamic boards").with_icon(SpaceIcon::Automation),
                SpaceNode::new("documents", "Documents").with_icon(SpaceIcon::Doc),
                SpaceNode::new("funnel", "Funnel").with_icon(SpaceIcon::Funnel),
                SpaceNode::new("automations", "Automations").with_icon(SpaceIcon::Automation),
            ]),
            folder("support", "Support desk"),
            board("throughput", "Throughput"),
            board("reports-kanban", "Kanban reports"),
            board("marketing", "Marketing"),
            board("legal", "Legal"),
            SpaceNode::new("knowledge", "Knowledge base").with_icon(SpaceIcon::Globe),
            SpaceNode::new("community", "Community").with_icon(SpaceIcon::Community),
        ]),
        board("test-scenarios", "Test scenarios").expanded(true).with_children(vec![
            board("parent-child", "Parent and child")
                .expanded(true)
                .with_child(board("usm", "USM")),
            board("scenarios", "Scenarios")
                .expanded(true)
                .with_children(vec![folder("folder-2", "2"), folder("folder-1", "1")]),
        ]),
        SpaceNode::new("metafor", "Metaphor USM").with_icon(SpaceIcon::Community),
    ])
    .unwrap()
}

/// Five users: two administrators, one editor, two commenters
pub fn sample_users() -> Vec<UserProfile> {
    vec![
        UserProfile::new("1", "Alexei Ivanov", UserRole::Administrator)
            .with_username("a.ivanov")
            .with_email("a.ivanov@example.com"),
        UserProfile::new("2", "Maria Petrova", UserRole::Administrator)
            .with_username("m.petrova")
            .with_email("m.petrova@example.com"),
        UserProfile::new("3", "Dmitry Sidorov", UserRole::Commenter)
            .with_username("d.sidorov")
            .with_email("d.sidorov@example.com")
            .with_visible_spaces(["usm"]),
        UserProfile::new("4", "Anna Kozlova", UserRole::Editor)
            .with_username("a.kozlova")
            .with_email("a.kozlova@example.com")
            .with_visible_spaces(["demo", "legal"]),
        UserProfile::new("5", "Sergei Novikov", UserRole::Commenter)
            .with_username("s.novikov")
            .with_email("s.novikov@example.com"),
    ]
}

pub fn organization_workspace() -> WorkspaceFile {
    WorkspaceFile {
        spaces: organization_forest(),
        users: sample_users(),
        current_user: None,
        filters: Vec::new(),
        config: ScopeConfig::default(),
    }
}

pub fn setup_test_session() -> ScopeSession {
    ScopeSession::from_workspace(organization_workspace()).unwrap()
}

pub fn scenario_session() -> ScopeSession {
    let users = UserDirectory::new(sample_users()).unwrap();
    ScopeSession::new(scenario_forest(), users, ScopeConfig::default())
}
