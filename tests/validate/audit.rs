//! Integration tests for story reference audits

use codetabs_lookup::LookupService;
use codetabs_store::authoring::from_toml_str;
use codetabs_validate::{CoverageLevel, FileCoverage, audit_references};

const DOCUMENT: &str = r"
[badge.default]
react = '<Badge>Fulfilled</Badge>'
";

const STORY: &str = r"const meta = {
  title: 'Components/Feedback/Badge',
} satisfies Meta<typeof Badge>;

export default meta;

export const Default: Story = {
  parameters: {
    codeVariants: getCodeVariants('badge', 'default'),
  },
};

export const Tones: Story = {
  parameters: {
    codeVariants: getCodeVariants('badge', 'tones'),
  },
};
";

#[test]
fn audit_flags_unresolved_story() {
    let store = from_toml_str("feedback.toml", DOCUMENT).unwrap();
    let service = LookupService::new(&store);
    let coverage = FileCoverage::analyze("Badge.stories.tsx", STORY);

    assert!(
        coverage
            .stories
            .iter()
            .all(|story| story.level == CoverageLevel::Story)
    );

    let report = audit_references(&service, &coverage.references);
    assert_eq!(report.resolved, 1);
    assert_eq!(report.broken.len(), 1);

    let broken = &report.broken[0];
    assert_eq!(broken.reference.variant, "tones");
    assert!(broken.error.is_variant_not_found());
    assert_eq!(broken.error.context.as_ref().unwrap().line, Some(15));
}
