use crate::core::Pet;

const DELIMITER: &str = "~~~~~~~~~~~~~~~~~~~~~~~";

pub fn render_pet(pet: &Pet) -> String {
    pet.to_string()
}

/// 每隻寵物一行，以換行連接
pub fn render(pets: &[Pet]) -> String {
    pets.iter().map(render_pet).collect::<Vec<_>>().join("\n")
}

/// 依分類檢視：每隻有分類的寵物輸出一個區塊，沒有分類的寵物不出現在這個檢視
pub fn render_by_category(pets: &[Pet]) -> String {
    let mut lines = Vec::new();

    for pet in pets {
        if let Some(category) = &pet.category {
            lines.push(DELIMITER.to_string());
            lines.push(format!("category: {}", category.name));
            lines.push(format!("name: {}", pet.display_name()));
            lines.push(DELIMITER.to_string());
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_one_line_per_pet() {
        let pets = vec![
            Pet::new(1)
                .with_category(1, "Dog")
                .with_name("Buddy")
                .with_tags(&[(101, "Friendly"), (102, "Active")])
                .with_status("available"),
            Pet::new(2),
        ];

        let report = render(&pets);
        let lines: Vec<&str> = report.split('\n').collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "ID: 1, Name: Buddy, Category: Dog, Status: available, Tags: Friendly, Active"
        );
        assert!(lines[1].contains("Category: No Category"));
        assert!(lines[1].contains("Tags: No Tags"));
    }

    #[test]
    fn test_render_empty_is_empty_text() {
        assert_eq!(render(&[]), "");
        assert_eq!(render_by_category(&[]), "");
    }

    #[test]
    fn test_render_by_category_blocks() {
        let pets = vec![
            Pet::new(2).with_category(2, "Cat").with_name("Whiskers"),
            Pet::new(3).with_category(1, "Dog"),
        ];

        let report = render_by_category(&pets);

        let expected = [
            DELIMITER,
            "category: Cat",
            "name: Whiskers",
            DELIMITER,
            DELIMITER,
            "category: Dog",
            "name: ",
            DELIMITER,
        ]
        .join("\n");
        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_by_category_skips_uncategorised() {
        let pets = vec![
            Pet::new(1).with_name("Stray"),
            Pet::new(2).with_category(2, "Cat").with_name("Whiskers"),
        ];

        let report = render_by_category(&pets);

        assert!(!report.contains("Stray"));
        assert_eq!(report.matches("category: ").count(), 1);
    }
}
