//! 测试辅助模块
//!
//! 提供小型固定目录和便捷的测试工厂方法。

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::services::Navigator;

/// Small catalog covering every record type
pub const SAMPLE_CATALOG_JSON: &str = r#"{
    "requirements": [
        {"id": "FR-01", "kind": "functional", "title": "Submit access request",
         "description": "Users can request a permission change.", "priority": "must"},
        {"id": "NFR-01", "kind": "non-functional", "title": "Audit retention",
         "description": "Decisions are retained for one year.", "priority": "should",
         "category": "Compliance"},
        {"id": "FR-02", "kind": "functional", "title": "Approve request",
         "description": "Approvers can approve or reject.", "priority": "must"}
    ],
    "actors": [
        {"key": "requester", "name": "Requester", "description": "Asks for access.",
         "icon": "user", "useCases": ["Submit request", "Track status"]},
        {"key": "business-approver", "name": "Business Approver",
         "description": "Owns the business decision.", "icon": "briefcase",
         "useCases": ["Approve request"]}
    ],
    "workflows": [
        {"key": "access-request", "title": "Access Request", "steps": [
            {"actor": "Requester", "action": "Submit request", "detail": "Fills in the form."},
            {"actor": "Business Approver", "action": "Business approval", "detail": "Checks need."},
            {"actor": "IT Administrator", "action": "Technical approval", "detail": "Checks scope."},
            {"actor": "Automation", "action": "Implement change", "detail": "Applies role."}
        ]},
        {"key": "access-review", "title": "Access Review", "steps": []}
    ],
    "components": [
        {"key": "entra-id", "title": "Microsoft Entra ID", "description": "Identity provider.",
         "integrations": ["Issues tokens"], "dataFlow": ["Group membership"],
         "configuration": {"environment": ["Tenant ID"], "security": ["Conditional access"],
                           "monitoring": ["Sign-in logs"]}},
        {"key": "openai", "title": "Azure OpenAI Service", "description": "Summarises requests.",
         "integrations": ["Called by the approval orchestrator", "Reads policy documents"],
         "dataFlow": ["Request text in", "Risk summary out"],
         "configuration": {"environment": ["Deployment name"],
                           "security": ["Managed identity", "Private endpoint"],
                           "monitoring": ["Token usage"]}},
        {"key": "key-vault", "title": "Azure Key Vault", "description": "Secret storage.",
         "configuration": {"security": ["RBAC"]}}
    ],
    "layers": [
        {"key": "identity", "name": "Identity", "description": "Who is who.",
         "components": ["entra-id", "key-vault"]},
        {"key": "intelligence", "name": "Intelligence", "description": "AI assistance.",
         "components": ["openai"]}
    ]
}"#;

/// Parsed [`SAMPLE_CATALOG_JSON`]
pub fn sample_catalog() -> Catalog {
    Catalog::from_json(SAMPLE_CATALOG_JSON).expect("sample catalog must parse")
}

/// Navigator over the sample catalog
pub fn sample_navigator() -> Navigator {
    Navigator::new(Arc::new(sample_catalog()))
}
