use folio_core::{
    all_skills, bundled_posts, bundled_projects, bundled_skills, post_outline, Catalog, Post,
};

#[test]
fn bundled_projects_keep_declaration_order() {
    let projects = bundled_projects().unwrap();
    let slugs: Vec<&str> = projects
        .list_all()
        .iter()
        .map(|project| project.slug.as_str())
        .collect();
    assert_eq!(
        slugs,
        vec![
            "shiv-kumar-mehandi-arts",
            "hack-gear-1-0",
            "mail-notifier-promails",
            "youtube-downloader",
            "ai-os",
            "mail-automation",
        ]
    );
}

#[test]
fn get_by_slug_finds_exact_match_only() {
    let projects = bundled_projects().unwrap();
    let hack_gear = projects.get_by_slug("hack-gear-1-0").unwrap();
    assert_eq!(hack_gear.title, "Hack Gear 1.0");
    assert_eq!(hack_gear.category, "Web Design");

    assert!(projects.get_by_slug("Hack-Gear-1-0").is_none());
    assert!(projects.get_by_slug("").is_none());
    assert!(bundled_posts().unwrap().get_by_slug("missing-post").is_none());
}

#[test]
fn lookup_on_empty_catalog_is_not_found() {
    let catalog: Catalog<Post> = Catalog::try_new(Vec::new()).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.get_by_slug("anything").is_none());
    let adjacent = catalog.items_adjacent_to("anything");
    assert!(adjacent.previous.is_none() && adjacent.next.is_none());
}

#[test]
fn distinct_categories_follow_first_seen_order() {
    let projects = bundled_projects().unwrap();
    assert_eq!(
        projects.distinct_categories(),
        vec!["UI/UX", "Web Design", "Web App", "Python Tool", "AI/ML", "Automation"]
    );
}

#[test]
fn distinct_technologies_have_no_duplicates() {
    let technologies = bundled_projects().unwrap().distinct_technologies();
    assert_eq!(
        technologies,
        vec![
            "HTML5",
            "CSS3",
            "JavaScript",
            "UI/UX Design",
            "Web Design",
            "Python",
            "Flask",
            "Flask-Caching",
            "Flask-Limiter",
            "SQLite",
            "yt-dlp",
            "Linux",
            "AI/ML",
            "NLP",
            "Voice Recognition",
            "SMTP",
            "Email APIs",
        ]
    );
}

#[test]
fn distinct_tags_flatten_posts() {
    let tags = bundled_posts().unwrap().distinct_tags();
    assert_eq!(tags.len(), 14);
    assert_eq!(&tags[..4], ["React", "JavaScript", "Frontend", "TypeScript"]);
    assert_eq!(tags.last(), Some(&"Architecture"));
}

#[test]
fn adjacency_respects_boundaries() {
    let posts = bundled_posts().unwrap();

    let first = posts.items_adjacent_to("modern-react-patterns");
    assert!(first.previous.is_none());
    assert_eq!(first.next.unwrap().slug, "typescript-tips-tricks");

    let interior = posts.items_adjacent_to("css-grid-flexbox-guide");
    assert_eq!(
        interior.previous.unwrap().slug,
        "performance-optimization-react"
    );
    assert_eq!(interior.next.unwrap().slug, "web-accessibility-guide");

    let last = posts.items_adjacent_to("state-management-strategies");
    assert_eq!(last.previous.unwrap().slug, "web-accessibility-guide");
    assert!(last.next.is_none());

    let unknown = posts.items_adjacent_to("not-a-post");
    assert!(unknown.previous.is_none());
    assert!(unknown.next.is_none());
}

#[test]
fn featured_and_by_category_keep_order() {
    let projects = bundled_projects().unwrap();
    let featured: Vec<&str> = projects
        .featured()
        .into_iter()
        .map(|project| project.slug.as_str())
        .collect();
    assert_eq!(
        featured,
        vec![
            "shiv-kumar-mehandi-arts",
            "hack-gear-1-0",
            "mail-notifier-promails",
            "youtube-downloader",
        ]
    );

    let automation = projects.by_category("Automation");
    assert_eq!(automation.len(), 1);
    assert_eq!(automation[0].slug, "mail-automation");
    assert!(projects.by_category("automation").is_empty());
}

#[test]
fn bundled_skills_flatten_in_display_order() {
    let groups = bundled_skills().unwrap();
    assert_eq!(groups.len(), 4);
    assert_eq!(groups[0].name, "Frontend");

    let skills = all_skills().unwrap();
    assert_eq!(skills.first(), Some(&"HTML5"));
    assert_eq!(skills.last(), Some(&"Discord"));
    assert_eq!(
        skills.len(),
        groups.iter().map(|group| group.skills.len()).sum::<usize>()
    );
}

#[test]
fn bundled_post_outline_follows_headings() {
    let post = bundled_posts()
        .unwrap()
        .get_by_slug("modern-react-patterns")
        .unwrap();
    let anchors: Vec<String> = post_outline(&post.content)
        .into_iter()
        .map(|entry| entry.anchor)
        .collect();
    assert_eq!(
        anchors,
        vec![
            "table-of-contents",
            "custom-hooks",
            "compound-components",
            "conclusion",
        ]
    );
}
