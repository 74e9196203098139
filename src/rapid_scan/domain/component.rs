use serde::Deserialize;

/// The `_meta` block Black Duck attaches to every resource view
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResourceMeta {
    #[serde(default)]
    pub href: String,
}

/// A single page of a Black Duck collection
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemArray<T> {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// One hit of `/api/components?q=...`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComponentSearchResult {
    /// Link to the matching component version, when the hit resolves to one
    #[serde(default)]
    pub version: Option<String>,
}

/// Catalog record for one component version
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComponentVersion {
    #[serde(default)]
    pub license: ComponentLicenseSet,
    #[serde(rename = "_meta")]
    pub meta: ResourceMeta,
}

impl ComponentVersion {
    pub fn href(&self) -> &str {
        &self.meta.href
    }

    pub fn licenses(&self) -> &[ComponentLicense] {
        &self.license.licenses
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ComponentLicenseSet {
    #[serde(default)]
    pub licenses: Vec<ComponentLicense>,
}

/// A license declared on a component version
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComponentLicense {
    pub name: String,
    /// Link to the license resource
    #[serde(default)]
    pub license: String,
}
