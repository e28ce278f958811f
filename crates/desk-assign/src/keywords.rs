//! Skill and urgency keyword tables with pre-compiled matchers
//!
//! Urgency keywords use substring matching: "securityalert" still scores
//! "security". Skill keywords require whole-word matches so that e.g.
//! "upgrade" never hits the Active Directory keyword "ad". Both tables are
//! lowercase and matched against lowercased ticket text.

use aho_corasick::AhoCorasick;
use regex::Regex;

/// Skill name -> keywords indicating the skill is relevant to a ticket.
pub const SKILL_KEYWORDS: &[(&str, &[&str])] = &[
    ("Networking", &["network", "networking", "firewall", "vpn", "routing", "switch", "cisco", "dns"]),
    ("Linux_Administration", &["linux", "ubuntu", "samba", "server"]),
    ("Cloud_AWS", &["aws", "ec2", "s3", "amazon web services"]),
    ("VPN_Troubleshooting", &["vpn", "tunnel", "disconnection", "authentication error"]),
    ("Hardware_Diagnostics", &["hardware", "laptop", "desktop", "monitor", "port", "boot", "fan", "battery", "memory", "disk space"]),
    ("Windows_Server_2022", &["windows server", "active directory"]),
    ("Active_Directory", &["active directory", "ad", "user account", "group policy", "sso", "saml"]),
    ("Virtualization_VMware", &["vmware", "virtualization", "vm"]),
    ("Software_Licensing", &["license", "licensing", "adobe", "visio", "tableau"]),
    ("Network_Security", &["firewall", "security", "phishing", "malware", "antivirus", "siem", "ids"]),
    ("Database_SQL", &["sql", "database", "query", "backup", "db"]),
    ("Firewall_Configuration", &["firewall", "ruleset", "port"]),
    ("Identity_Management", &["identity", "sso", "saml", "account", "login"]),
    ("SaaS_Integrations", &["saas", "salesforce", "jira", "trello", "integration"]),
    ("Microsoft_365", &["microsoft 365", "m365", "outlook", "teams", "sharepoint", "onedrive"]),
    ("SharePoint_Online", &["sharepoint"]),
    ("PowerShell_Scripting", &["powershell", "scripting"]),
    ("Endpoint_Management", &["endpoint", "mdm", "compliant"]),
    ("Windows_OS", &["windows", "os", "boot"]),
    ("Cloud_Azure", &["azure", "app service"]),
    ("DevOps_CI_CD", &["devops", "ci/cd", "jenkins", "docker"]),
    ("Kubernetes_Docker", &["kubernetes", "docker", "container"]),
    ("Python_Scripting", &["python", "script"]),
    ("Mac_OS", &["mac", "macos", "macbook"]),
    ("Printer_Troubleshooting", &["printer", "printing"]),
    ("Laptop_Repair", &["laptop", "repair", "hardware"]),
    ("Network_Cabling", &["cabling", "cable", "rack"]),
    ("Voice_VoIP", &["voip", "phone", "voice"]),
    ("Network_Monitoring", &["monitoring", "network performance"]),
    ("Switch_Configuration", &["switch", "cisco"]),
    ("Routing_Protocols", &["routing", "protocol"]),
    ("Cisco_IOS", &["cisco"]),
    ("Endpoint_Security", &["endpoint", "security", "antivirus", "malware"]),
    ("Antivirus_Malware", &["antivirus", "malware", "trojan", "virus", "spyware"]),
    ("Phishing_Analysis", &["phishing", "email", "security"]),
    ("Security_Audits", &["audit", "security"]),
    ("SIEM_Logging", &["siem", "log", "logging"]),
    ("ETL_Processes", &["etl"]),
    ("Data_Warehousing", &["data warehouse"]),
    ("PowerBI_Tableau", &["powerbi", "tableau"]),
    ("API_Troubleshooting", &["api"]),
    ("Web_Server_Apache_Nginx", &["apache", "nginx", "web server", "502", "503", "404"]),
    ("DNS_Configuration", &["dns"]),
    ("SSL_Certificates", &["ssl", "certificate"]),
];

/// Urgency keyword -> additive priority weight.
pub const URGENCY_KEYWORDS: &[(&str, u32)] = &[
    ("critical", 5),
    ("outage", 5),
    ("down", 5),
    ("unavailable", 5),
    ("breach", 5),
    ("urgent", 4),
    ("security", 4),
    ("vulnerable", 4),
    ("high-priority", 3),
    ("affecting", 3),
    ("intermittent", 2),
    ("slow", 2),
    ("request", 1),
    ("low-priority", 1),
];

struct SkillPattern {
    name: &'static str,
    pattern: Regex,
}

/// Pre-compiled keyword matcher for ticket text.
///
/// Urgency keywords are compiled into one Aho-Corasick automaton and
/// searched with overlapping matches; each keyword's weight counts at most
/// once per ticket. Each skill's keyword list is compiled into a single
/// word-boundary alternation regex.
pub struct KeywordMatcher {
    urgency: AhoCorasick,
    urgency_weights: Vec<u32>,
    skills: Vec<SkillPattern>,
}

impl KeywordMatcher {
    /// Compile the static tables.
    pub fn new() -> Self {
        let patterns: Vec<&str> = URGENCY_KEYWORDS.iter().map(|(kw, _)| *kw).collect();
        let urgency = AhoCorasick::new(&patterns).expect("Failed to build urgency automaton");
        let urgency_weights = URGENCY_KEYWORDS.iter().map(|(_, w)| *w).collect();

        let skills = SKILL_KEYWORDS
            .iter()
            .map(|(name, keywords)| {
                let alternation = keywords
                    .iter()
                    .map(|kw| regex::escape(kw))
                    .collect::<Vec<_>>()
                    .join("|");
                let pattern = Regex::new(&format!(r"\b(?:{})\b", alternation))
                    .expect("Failed to compile skill keyword pattern");
                SkillPattern { name, pattern }
            })
            .collect();

        Self {
            urgency,
            urgency_weights,
            skills,
        }
    }

    /// Sum of weights for urgency keywords present in `text`.
    ///
    /// Substring discipline: any occurrence counts, but a keyword contributes
    /// its weight at most once. `text` must already be lowercase.
    pub fn urgency_score(&self, text: &str) -> u32 {
        let mut seen = vec![false; self.urgency_weights.len()];
        let mut score = 0;
        for m in self.urgency.find_overlapping_iter(text) {
            let idx = m.pattern().as_usize();
            if !seen[idx] {
                seen[idx] = true;
                score += self.urgency_weights[idx];
            }
        }
        score
    }

    /// Skills whose keyword set whole-word-matches `text`, in table order.
    ///
    /// `text` must already be lowercase.
    pub fn matching_skills(&self, text: &str) -> Vec<&'static str> {
        self.skills
            .iter()
            .filter(|s| s.pattern.is_match(text))
            .map(|s| s.name)
            .collect()
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_accumulates_keywords() {
        let m = KeywordMatcher::new();
        assert_eq!(m.urgency_score("critical outage"), 10);
        assert_eq!(m.urgency_score("please handle this request"), 1);
        assert_eq!(m.urgency_score("nothing noteworthy here"), 0);
    }

    #[test]
    fn test_urgency_is_substring_matched() {
        let m = KeywordMatcher::new();
        // "security" inside a larger token still counts
        assert_eq!(m.urgency_score("securityalert triggered"), 4);
    }

    #[test]
    fn test_urgency_counts_each_keyword_once() {
        let m = KeywordMatcher::new();
        assert_eq!(m.urgency_score("down down down"), 5);
    }

    #[test]
    fn test_skills_require_word_boundaries() {
        let m = KeywordMatcher::new();
        // "upgrade" contains "ad" but must not hit Active_Directory
        let skills = m.matching_skills("please upgrade my machine");
        assert!(!skills.contains(&"Active_Directory"));

        let skills = m.matching_skills("ad group policy broken");
        assert!(skills.contains(&"Active_Directory"));
    }

    #[test]
    fn test_skills_match_multiword_keywords() {
        let m = KeywordMatcher::new();
        let skills = m.matching_skills("billing issue with amazon web services");
        assert!(skills.contains(&"Cloud_AWS"));
    }

    #[test]
    fn test_skills_match_non_alphabetic_keywords() {
        let m = KeywordMatcher::new();
        let skills = m.matching_skills("our ci/cd pipeline fails with 502 errors");
        assert!(skills.contains(&"DevOps_CI_CD"));
        assert!(skills.contains(&"Web_Server_Apache_Nginx"));
    }

    #[test]
    fn test_one_keyword_can_mark_many_skills() {
        let m = KeywordMatcher::new();
        let skills = m.matching_skills("firewall misconfigured");
        assert!(skills.contains(&"Networking"));
        assert!(skills.contains(&"Network_Security"));
        assert!(skills.contains(&"Firewall_Configuration"));
    }
}
