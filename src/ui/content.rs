//! Static page copy.

/// Section identifiers in page order.
pub const SECTION_IDS: [&str; 5] = ["home", "about", "skills", "projects", "contact"];

/// Heading shown at the top of a section.
pub fn section_title(id: &str) -> &'static str {
    match id {
        "home" => "Hi, I build things for the web",
        "about" => "About",
        "skills" => "Skills",
        "projects" => "Projects",
        "contact" => "Get in touch",
        _ => "",
    }
}

/// Nav-link caption for a section.
pub fn nav_caption(id: &str) -> &'static str {
    match id {
        "home" => "Home",
        "about" => "About",
        "skills" => "Skills",
        "projects" => "Projects",
        "contact" => "Contact",
        _ => "",
    }
}

/// Paragraphs revealed in order under a section heading.
pub fn section_lines(id: &str) -> &'static [&'static str] {
    match id {
        "home" => &[
            "Software engineer working on interactive graphics and tooling.",
            "Scroll, use the arrow keys or pick a section on the right.",
        ],
        "about" => &[
            "I like small programs with sharp edges and clear invariants.",
            "Most of my time goes into rendering, build systems and developer tools.",
            "Outside of work: climbing, film photography, too much coffee.",
        ],
        "projects" => &[
            "Voxel sandbox: chunked terrain streaming with async meshing.",
            "Particle playground: GPU-driven formations and attractors.",
            "Static site toolkit: markdown to HTML with live reload.",
        ],
        "contact" => &["Have a project in mind? Drop me a line."],
        _ => &[],
    }
}

/// Skill names and proficiency levels in percent.
pub const SKILLS: [(&str, f32); 5] = [
    ("Rust", 90.0),
    ("TypeScript", 80.0),
    ("Graphics / WGSL", 70.0),
    ("Systems design", 75.0),
    ("UI / UX", 60.0),
];
