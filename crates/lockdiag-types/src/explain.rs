//! Explain registry for restore log codes.
//!
//! Maps each known code to a title, plus a description and remediation shared by its family
//! (`NU10xx`, `NU11xx`, ...).

use crate::code::{KnownCode, KNOWN_CODES};

/// Explanation entry for a restore log code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Canonical code, e.g. `NU1101`.
    pub code: &'static str,
    /// Short description of the code.
    pub title: &'static str,
    /// Name of the code family.
    pub family: &'static str,
    /// What the family of codes reports.
    pub description: &'static str,
    /// How to address it.
    pub remediation: &'static str,
}

struct Family {
    name: &'static str,
    description: &'static str,
    remediation: &'static str,
}

/// Look up an explanation by code (case-insensitive).
///
/// Returns `None` if the code is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    let code = KnownCode::parse(identifier)?;
    let family = family(code.family());
    Some(Explanation {
        code: code.as_str(),
        title: title(code.as_str()),
        family: family.name,
        description: family.description,
        remediation: family.remediation,
    })
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    KNOWN_CODES
}

fn title(code: &str) -> &'static str {
    match code {
        "NU1000" => "Restore failed for an unspecified reason",
        "NU1001" => "Invalid project property value",
        "NU1002" => "Invalid package reference or central version",
        "NU1003" => "PackageTargetFallback and AssetTargetFallback are both set",
        "NU1004" => "Locked mode restore would change the lock file",
        "NU1005" => "Lock file settings are inconsistent across projects",
        "NU1006" => "Lock file is out of date with the project",
        "NU1007" => "Version ignored for a centrally managed package",
        "NU1008" => "Version set on a centrally managed package reference",
        "NU1009" => "Implicitly defined package has a central version",
        "NU1010" => "Package reference has no central PackageVersion",
        "NU1011" => "Floating version used with central package management",
        "NU1012" => "Platform version missing for the target framework",
        "NU1013" => "Restore input is not supported for the project",
        "NU1014" => "Project restore settings are inconsistent",
        "NU1015" => "Package reference has no version",
        "NU1016" => "Version override is ignored",
        "NU1017" => "Restore property has an unsupported value",
        "NU1018" => "Restore setting is deprecated",

        "NU1100" => "Unable to resolve dependency",
        "NU1101" => "No package exists with the given id",
        "NU1102" => "No version of the package satisfies the range",
        "NU1103" => "Only prerelease versions satisfy the range",
        "NU1104" => "Referenced project path does not exist",
        "NU1105" => "Unable to read project information",
        "NU1106" => "Conflicting version requirements",
        "NU1107" => "Version conflict between dependencies",
        "NU1108" => "Dependency cycle detected",
        "NU1109" => "Central version would downgrade a transitive package",
        "NU1110" => "Package download could not be resolved",

        "NU1201" => "Project is not compatible with the target framework",
        "NU1202" => "Package is not compatible with the target framework",
        "NU1203" => "Runtime-specific assets are missing",
        "NU1204" => "Runtime graph is incompatible with the project",
        "NU1211" => "Project has more than one tool reference",
        "NU1212" => "Tool reference is not a dotnet tool package",
        "NU1213" => "Package type is not supported by the project",
        "NU1214" => "Tool package referenced as a regular dependency",

        "NU1301" => "Unable to load the service index for a source",
        "NU1302" => "Source uses insecure HTTP",
        "NU1303" => "Source is disabled",
        "NU1304" => "Source credentials were rejected",

        "NU1401" => "Package is missing required metadata",
        "NU1402" => "Package could not be extracted",
        "NU1403" => "Package content hash validation failed",

        "NU1500" => "Restore input contains an invalid value",
        "NU1501" => "Invalid target framework",
        "NU1502" => "Unknown compatibility profile",
        "NU1503" => "Project was skipped because it is not restorable",
        "NU1504" => "Duplicate PackageReference items",
        "NU1505" => "Duplicate PackageDownload items",
        "NU1506" => "Duplicate PackageVersion items",
        "NU1507" => "Multiple package sources without package source mapping",
        "NU1508" => "Duplicate source key in package source mapping",
        "NU1509" => "Duplicate project reference",
        "NU1510" => "PackageReference is not needed and can be pruned",
        "NU1511" => "Project reference conflicts with a package reference",

        "NU1601" => "Dependency version was bumped to the resolved version",
        "NU1602" => "Dependency has no inclusive lower bound",
        "NU1603" => "Approximate best match was resolved",
        "NU1604" => "Project dependency has no inclusive lower bound",
        "NU1605" => "Detected package downgrade",
        "NU1606" => "Dependency range is open-ended",
        "NU1607" => "Version conflict within a dependency constraint",
        "NU1608" => "Resolved version is outside the dependency constraint",
        "NU1609" => "Package version is outside a fixed version range",

        "NU1701" => "Package restored using a fallback framework",
        "NU1702" => "Project restored using a fallback framework",
        "NU1703" => "Target framework is deprecated",

        "NU1801" => "Source was unreachable",
        "NU1802" => "Source could not be searched",
        "NU1803" => "Source uses plain HTTP",

        "NU1900" => "Vulnerability data could not be retrieved",
        "NU1901" => "Package has a known low severity vulnerability",
        "NU1902" => "Package has a known moderate severity vulnerability",
        "NU1903" => "Package has a known high severity vulnerability",
        "NU1904" => "Package has a known critical severity vulnerability",
        "NU1905" => "Audit source does not provide vulnerability data",

        "NU3000" => "Package signature validation failed",
        "NU3001" => "Invalid signing request",
        "NU3002" => "Signed package content was modified",
        "NU3003" => "Package signature is invalid",
        "NU3004" => "Package is not signed",
        "NU3005" => "Signature file is malformed",
        "NU3006" => "Signed package contains unexpected entries",
        "NU3007" => "Signature format is not supported",
        "NU3008" => "Package integrity check failed",
        "NU3009" => "Signature does not contain exactly one primary signature",
        "NU3010" => "Signer certificate is not valid for code signing",
        "NU3011" => "Signature uses an unsupported hash algorithm",
        "NU3012" => "Signer certificate failed verification",
        "NU3013" => "Signer certificate key is too weak",
        "NU3014" => "Signature content type is not supported",
        "NU3015" => "Certificate could not be used for signing",
        "NU3016" => "Package hash algorithm is not supported",
        "NU3017" => "Signature was not timestamped",
        "NU3018" => "Signer certificate chain could not be built",
        "NU3019" => "Timestamp integrity check failed",
        "NU3020" => "Timestamp response is invalid",
        "NU3021" => "Timestamp signature is invalid",
        "NU3022" => "Timestamp uses an unsupported algorithm",
        "NU3023" => "Timestamp certificate is not valid for timestamping",
        "NU3024" => "Timestamp hash algorithm is not supported",
        "NU3025" => "Timestamp predates the signer certificate",
        "NU3026" => "Timestamp response does not match the request",
        "NU3027" => "Signature was not found",
        "NU3028" => "Timestamp certificate chain could not be built",
        "NU3029" => "Timestamp is invalid",
        "NU3030" => "Timestamp message imprint does not match",
        "NU3031" => "Repository signature is missing",
        "NU3032" => "Package has more than one repository signature",
        "NU3033" => "Repository countersignature is invalid",
        "NU3034" => "Package owner is not trusted",
        "NU3035" => "Signing certificate is not trusted",
        "NU3036" => "Signature is not timestamped and the certificate expired",
        "NU3037" => "Signature validity period has expired",
        "NU3038" => "Signature verification exceeded its allowed time",
        "NU3039" => "Countersignature is not allowed here",
        "NU3040" => "Signing certificate is self-issued",
        "NU3041" => "Trusted signer entry is invalid",
        "NU3042" => "Signature verification is not supported on this platform",

        _ => "Restore diagnostic",
    }
}

fn family(number: u8) -> Family {
    match number {
        10 => Family {
            name: "Restore inputs",
            description: "\
Reported while reading restore inputs: project properties, lock files and central
package management settings. These usually point at the project file itself.",
            remediation: "\
Check the project file and Directory.Packages.props named in the file path, fix the
reported property, and restore again.",
        },
        11 => Family {
            name: "Dependency resolution",
            description: "\
The resolver could not produce a consistent dependency graph: a package or version
could not be found, requirements conflict, or the graph contains a cycle.",
            remediation: "\
Verify package ids and version ranges, make sure the configured sources carry the
package, and pin a version that satisfies every requirement.",
        },
        12 => Family {
            name: "Compatibility",
            description: "\
A package or project was resolved but provides no assets for one of the target
graphs. The parent target on the diagnostic names the incompatible framework.",
            remediation: "\
Pick a package version that supports the target framework, or remove the framework
from the project's target list.",
        },
        13 => Family {
            name: "Feeds",
            description: "\
A package source could not be used: its service index failed to load or it is
configured insecurely.",
            remediation: "\
Check NuGet.Config sources, credentials and network access. Prefer HTTPS sources.",
        },
        14 => Family {
            name: "Package integrity",
            description: "\
A downloaded package did not match the content hash recorded for it.",
            remediation: "\
Clear the local package caches and restore again. If the mismatch persists the
package on the source has changed and the lock file must be regenerated.",
        },
        15 => Family {
            name: "Project configuration",
            description: "\
The project declares target frameworks or profiles the restore cannot interpret.",
            remediation: "\
Fix the TargetFramework(s) property and restore again.",
        },
        16 => Family {
            name: "Version selection",
            description: "\
The resolver picked a version different from the one requested: a higher version,
an approximate match, or a downgrade.",
            remediation: "\
Declare explicit lower bounds and reference the version actually needed. Downgrades
are fixed by referencing the higher version directly.",
        },
        17 => Family {
            name: "Framework fallback",
            description: "\
A package was restored using a fallback framework and may not be fully compatible
with the project.",
            remediation: "\
Use a package version built for the project's framework, or suppress the code once
compatibility has been verified.",
        },
        18 => Family {
            name: "Source availability",
            description: "\
A source could not be reached but restore completed using other sources.",
            remediation: "\
Check the source URL and network access, or remove the source from NuGet.Config.",
        },
        19 => Family {
            name: "Vulnerability audit",
            description: "\
The restore audit found packages with published vulnerabilities, or could not
retrieve vulnerability data.",
            remediation: "\
Upgrade the affected package (directly or through a central version) to a patched
version. Escalate these codes to errors to block vulnerable builds.",
        },
        30 => Family {
            name: "Package signing",
            description: "\
A package signature, timestamp or signer certificate failed verification during
restore, or the package is unsigned where a signature is required.",
            remediation: "\
Check trustedSigners in NuGet.Config and the signatureValidationMode setting. Clear
the package caches if the package may have been altered, and ask the package owner
to re-sign it if the certificate has expired or been revoked.",
        },
        _ => Family {
            name: "Restore",
            description: "Reported by the package restore.",
            remediation: "See the diagnostic message for details.",
        },
    }
}
