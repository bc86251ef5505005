//! Static page and cheat sheet content
//!
//! Informational pages render a short summary plus a list of links; the
//! cheat sheets are printable quick references made of titled sections.

use crate::router::{CheatSheetId, ViewKind};
use crate::text::wrap_text;

/// A titled list of bullet points
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct CheatSheet {
    pub id: CheatSheetId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub sections: &'static [Section],
    pub footer: &'static str,
}

/// A link on a static page: label and target page tag
pub type Link = (&'static str, &'static str);

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPage {
    pub summary: &'static [&'static str],
    pub sections: &'static [Section],
    pub links: &'static [Link],
}

const HOTLINE: &str = "Security hotline: 1-800-SECURE-NOW (24/7) | security@company.com";

static CHEAT_SHEETS: [CheatSheet; 4] = [
    CheatSheet {
        id: CheatSheetId::IncidentResponse,
        title: "Incident Response Quick Guide",
        subtitle: "Immediate action steps during security incidents",
        sections: &[
            Section {
                heading: "1. Stop & Assess",
                items: &[
                    "Stay calm and do not take any hasty actions",
                    "Note the time and what you observed",
                    "Do NOT attempt to investigate on your own",
                ],
            },
            Section {
                heading: "2. Disconnect & Isolate",
                items: &[
                    "Disconnect the affected device from the network (Wi-Fi/Ethernet)",
                    "Do NOT shut down the computer; it preserves evidence",
                    "Take photos of the screen if possible",
                ],
            },
            Section {
                heading: "3. Report Immediately",
                items: &[
                    "Call the security hotline: 1-800-SECURE-NOW",
                    "Email an incident report to security@company.com",
                    "Notify your immediate supervisor",
                ],
            },
            Section {
                heading: "4. Document Everything",
                items: &[
                    "Write down exactly what happened (who, what, when, where)",
                    "Save any suspicious emails, messages, or files",
                    "Record all actions you took",
                ],
            },
            Section {
                heading: "5. Cooperate & Follow Up",
                items: &[
                    "Follow instructions from the security team",
                    "Provide any requested information promptly",
                    "Wait for the all-clear before resuming normal operations",
                ],
            },
            Section {
                heading: "Common Incident Types",
                items: &[
                    "Phishing email: do not click links or open attachments; forward to security@company.com",
                    "Ransomware: disconnect immediately, do NOT pay the ransom, call the hotline",
                    "Lost/stolen device: report within 1 hour; the device will be remotely wiped",
                    "Data breach: report any unauthorized access to data and preserve all evidence",
                ],
            },
        ],
        footer: HOTLINE,
    },
    CheatSheet {
        id: CheatSheetId::Phishing,
        title: "Phishing Red Flags Cheat Sheet",
        subtitle: "Quick reference for identifying phishing emails",
        sections: &[
            Section {
                heading: "Sender Information",
                items: &[
                    "Email from an unknown or suspicious sender",
                    "Sender address doesn't match the company domain",
                    "Slight misspellings in the domain (microsft.com vs microsoft.com)",
                    "Generic greetings like \"Dear Customer\" instead of your name",
                ],
            },
            Section {
                heading: "Message Content",
                items: &[
                    "Urgency or threats (\"Act now!\" \"Account will be suspended!\")",
                    "Requests for sensitive information (password, SSN, credit card)",
                    "Too good to be true offers (lottery wins, inheritances)",
                    "Poor grammar and spelling errors",
                ],
            },
            Section {
                heading: "Links & Attachments",
                items: &[
                    "Suspicious links (hover to see the real URL)",
                    "Shortened URLs (bit.ly, tinyurl) from unknown sources",
                    "Unexpected attachments, especially .exe and .zip files",
                    "Links that don't match the sender's organization",
                ],
            },
            Section {
                heading: "Request Type",
                items: &[
                    "Asks you to update or verify account information",
                    "Asks you to click a link to resolve an issue",
                    "Asks for immediate action or decision",
                    "Asks you to bypass normal security procedures",
                ],
            },
            Section {
                heading: "What To Do",
                items: &[
                    "Verify the sender through official channels",
                    "Hover over links to check the real URL",
                    "Forward the message to security@company.com",
                    "Delete it after reporting",
                ],
            },
        ],
        footer: "Golden rule: when in doubt, don't click!",
    },
    CheatSheet {
        id: CheatSheetId::Password,
        title: "Password Security Cheat Sheet",
        subtitle: "Best practices for creating and managing passwords",
        sections: &[
            Section {
                heading: "Do",
                items: &[
                    "Use 12+ characters; longer passwords are exponentially harder to crack",
                    "Mix uppercase, lowercase, numbers, and symbols",
                    "Use passphrases, e.g. \"Coffee@Sunrise#Mountain2025!\"",
                    "Enable 2FA/MFA for an extra layer beyond passwords",
                    "Use a password manager to store and generate unique passwords",
                    "Change compromised passwords immediately",
                ],
            },
            Section {
                heading: "Don't",
                items: &[
                    "Short passwords (less than 8 characters)",
                    "Personal information (names, birthdays, addresses)",
                    "Common words or keyboard patterns",
                    "Reusing the same password across sites",
                    "Sequential characters",
                    "Sharing passwords via email, chat, or phone",
                ],
            },
            Section {
                heading: "Passphrase Method",
                items: &[
                    "Think of 4-5 random words: coffee, sunrise, mountain, blue",
                    "Add numbers and symbols: Coffee@Sunrise#Mountain2025!",
                    "Make it unique per account: Coffee@Sunrise#Gmail2025!",
                ],
            },
            Section {
                heading: "Multi-Factor Authentication",
                items: &[
                    "Authenticator apps (best)",
                    "Hardware keys",
                    "SMS codes only when nothing else is offered",
                ],
            },
        ],
        footer: "Change passwords when compromised, not on a calendar.",
    },
    CheatSheet {
        id: CheatSheetId::SocialEngineering,
        title: "Social Engineering Defense Guide",
        subtitle: "Protect against manipulation and deception attacks",
        sections: &[
            Section {
                heading: "Common Attacks",
                items: &[
                    "Pretexting: a fake scenario to gain trust (\"IT support\" asking for your password)",
                    "Phishing: fraudulent messages requesting sensitive info",
                    "Baiting: something enticing, like a free USB drive that carries malware",
                    "Tailgating: following an authorized person into a restricted area",
                ],
            },
            Section {
                heading: "Warning Signals",
                items: &[
                    "Creates a sense of urgency or fear",
                    "Requests confidential information",
                    "Claims authority or importance",
                    "Offers too-good-to-be-true deals",
                ],
            },
            Section {
                heading: "The 4 Principles",
                items: &[
                    "Verify identity through official channels and known phone numbers",
                    "Question everything; ask why someone needs the information",
                    "Follow protocols; never share credentials or bypass procedures",
                    "Report suspicious activity immediately, without embarrassment",
                ],
            },
        ],
        footer: "When in doubt, verify. When suspicious, report.",
    },
];

pub fn cheat_sheet(id: CheatSheetId) -> &'static CheatSheet {
    CHEAT_SHEETS
        .iter()
        .find(|sheet| sheet.id == id)
        .unwrap_or(&CHEAT_SHEETS[0])
}

/// Render a cheat sheet as plain text wrapped to `width` columns
pub fn render_plain(sheet: &CheatSheet, width: usize) -> String {
    let rule = "=".repeat(width.min(sheet.title.len().max(1)));
    let mut out = String::new();
    out.push_str(sheet.title);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for line in wrap_text(sheet.subtitle, width) {
        out.push_str(&line);
        out.push('\n');
    }

    for section in sheet.sections {
        out.push('\n');
        out.push_str(section.heading);
        out.push('\n');
        for item in section.items {
            let wrapped = wrap_text(item, width.saturating_sub(4).max(1));
            for (i, line) in wrapped.iter().enumerate() {
                out.push_str(if i == 0 { "  - " } else { "    " });
                out.push_str(line);
                out.push('\n');
            }
        }
    }

    out.push('\n');
    for line in wrap_text(sheet.footer, width) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Content for pages that have no interactive state
pub fn static_page(kind: &ViewKind) -> StaticPage {
    match kind {
        ViewKind::Home => StaticPage {
            summary: &[
                "Stay Alert. Stay Secure.",
                "SecureGuard is your organization's security awareness hub: \
                 training, threat intelligence, and a direct line to the security team.",
                "24/7 monitoring | Expert support | Instant response",
            ],
            sections: &[],
            links: &[
                ("Start training", "training"),
                ("Spot the threats", "spot-threats"),
                ("Report an incident", "report"),
                ("Latest threat intelligence", "threats"),
            ],
        },
        ViewKind::Threats => StaticPage {
            summary: &["Current threat bulletins from the security operations center."],
            sections: &[Section {
                heading: "Active Alerts",
                items: &[
                    "CRITICAL  Zero-day vulnerability in email client; patch pending",
                    "HIGH      Phishing campaign targeting the financial sector",
                    "HIGH      Ransomware activity surge across the industry",
                    "MEDIUM    Suspicious login attempts detected on VPN",
                    "LOW       Outdated software detected on 15 devices",
                ],
            }],
            links: &[
                ("Spot the threats", "spot-threats"),
                ("Report an incident", "report"),
            ],
        },
        ViewKind::Policies => StaticPage {
            summary: &["Security policies, guides, and printable quick references."],
            sections: &[Section {
                heading: "Documents",
                items: &[
                    "Cybersecurity Policy Handbook 2025",
                    "Data Protection Regulations Overview (GDPR, CCPA)",
                    "Remote Work Security Checklist",
                ],
            }],
            links: &[
                ("Incident Response Quick Guide", "cheatsheet-incident-response"),
                ("Phishing Red Flags Cheat Sheet", "cheatsheet-phishing"),
                ("Password Security Cheat Sheet", "cheatsheet-password"),
                (
                    "Social Engineering Defense Guide",
                    "cheatsheet-social-engineering",
                ),
                ("Password guidelines & strength checker", "password-guidelines"),
                ("Incident response procedures", "incident-response-guide"),
            ],
        },
        ViewKind::Contact => StaticPage {
            summary: &[
                HOTLINE,
                "Company Headquarters, 123 Security Boulevard, Tech City, TC 12345",
            ],
            sections: &[Section {
                heading: "Before You Contact Us",
                items: &[
                    "For urgent security incidents, always call the hotline first",
                    "Have your employee ID ready",
                    "Document any suspicious activity before reporting",
                ],
            }],
            links: &[("Report an incident", "report")],
        },
        ViewKind::About => StaticPage {
            summary: &[
                "SecureGuard is run by the corporate security team to keep every \
                 employee informed, trained, and ready to respond.",
            ],
            sections: &[],
            links: &[
                ("Browse training", "training"),
                ("Quick reference cheat sheets", "policies"),
                ("Contact the team", "contact"),
            ],
        },
        ViewKind::News => StaticPage {
            summary: &["Upcoming events and program news."],
            sections: &[
                Section {
                    heading: "Events",
                    items: &[
                        "Cybersecurity Awareness Month Kickoff",
                        "Phishing Simulation Training",
                        "Ransomware Response Webinar",
                        "Security Incident Response Drill",
                    ],
                },
                Section {
                    heading: "News",
                    items: &[
                        "SecureGuard achieves SOC 2 Type II certification",
                        "New AI-powered threat detection system deployed",
                    ],
                },
            ],
            links: &[("Browse training", "training")],
        },
        ViewKind::IncidentResponseGuide => StaticPage {
            summary: &["How the security team handles a reported incident."],
            sections: &[
                Section {
                    heading: "Severity Levels",
                    items: &[
                        "P1 Critical: active ransomware, confirmed data exfiltration, major outage",
                        "P2 High: malware on multiple systems, confirmed credential compromise",
                        "P3 Medium: single infected workstation, suspicious email clicked",
                        "P4 Low: general suspicion with no interaction",
                    ],
                },
                Section {
                    heading: "Response Phases",
                    items: &[
                        "Triage / Acknowledge",
                        "Containment",
                        "Investigation",
                        "Eradication",
                        "Recovery",
                        "Post-Incident Review",
                    ],
                },
            ],
            links: &[
                ("Report an incident", "report"),
                ("Quick guide", "cheatsheet-incident-response"),
            ],
        },
        ViewKind::SpotThreats => StaticPage {
            summary: &["Which of these signs point to ransomware on your machine?"],
            sections: &[Section {
                heading: "Observed Symptoms",
                items: &[
                    "Q4_Report.xlsx now shows as Q4_Report.xlsx.locked",
                    "A window says \"Oops, your files have been encrypted\" with a countdown",
                    "Word documents fail to open with \"file is corrupted\" errors",
                    "Task Manager shows CPU at 95% with an unknown process encrypt.exe",
                    "Your background changed to a red screen with payment instructions",
                    "Shared company folders show \"Access Denied\" errors",
                ],
            }],
            links: &[
                ("Take the ransomware module", "module-ransomware"),
                ("Report an incident", "report"),
            ],
        },
        _ => StaticPage::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Catalog;
    use crate::router::Router;

    #[test]
    fn test_every_cheat_sheet_is_defined() {
        for id in CheatSheetId::ALL {
            let sheet = cheat_sheet(id);
            assert_eq!(sheet.id, id);
            assert!(!sheet.sections.is_empty());
        }
    }

    #[test]
    fn test_render_plain_wraps_items() {
        let sheet = cheat_sheet(CheatSheetId::Phishing);
        let text = render_plain(sheet, 40);
        assert!(text.starts_with("Phishing Red Flags Cheat Sheet\n"));
        assert!(text.contains("Sender Information\n"));
        assert!(text.lines().all(|line| line.chars().count() <= 40));
        assert!(text.trim_end().ends_with("don't click!"));
    }

    #[test]
    fn test_static_links_resolve() {
        let router = Router::new(&Catalog::embedded().unwrap());
        let kinds = [
            ViewKind::Home,
            ViewKind::Threats,
            ViewKind::Policies,
            ViewKind::Contact,
            ViewKind::About,
            ViewKind::News,
            ViewKind::IncidentResponseGuide,
            ViewKind::SpotThreats,
        ];
        for kind in kinds {
            for (label, tag) in static_page(&kind).links {
                assert!(
                    router.resolve(tag).kind != ViewKind::Home || *tag == "home",
                    "{label} -> {tag} does not resolve"
                );
            }
        }
    }

    #[test]
    fn test_policies_links_every_cheat_sheet() {
        let page = static_page(&ViewKind::Policies);
        for id in CheatSheetId::ALL {
            let tag = format!("cheatsheet-{}", id.tag());
            assert!(page.links.iter().any(|(_, t)| *t == tag));
        }
    }
}
