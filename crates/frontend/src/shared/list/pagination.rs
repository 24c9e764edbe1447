//! Постраничный вывод: границы среза и диапазон для отображения

/// Результат расчёта страницы.
///
/// `start`/`end`: полуинтервал с нуля для среза. `display_range`:
/// включительный диапазон с единицы для подписи «1–10 из 25».
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub effective_page: usize,
    pub start: usize,
    pub end: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub display_range: (usize, usize),
}

impl PageWindow {
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end.min(items.len());
        let start = self.start.min(end);
        &items[start..end]
    }

    pub fn has_prev(&self) -> bool {
        self.effective_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.effective_page < self.total_pages
    }
}

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total_items.div_ceil(page_size).max(1)
}

/// Рассчитать окно страницы.
///
/// Запрошенная страница молча прижимается к `[1, total_pages]`: коллекция
/// может уменьшиться (например, после удаления) между отрисовкой и кликом.
pub fn paginate(total_items: usize, page_size: usize, requested_page: usize) -> PageWindow {
    let page_size = page_size.max(1);
    let total_pages = total_pages(total_items, page_size);
    let effective_page = requested_page.clamp(1, total_pages);

    let start = (effective_page - 1) * page_size;
    let end = (start + page_size).min(total_items);
    let display_range = if total_items == 0 {
        (0, 0)
    } else {
        (start + 1, end)
    };

    PageWindow {
        effective_page,
        start,
        end,
        total_pages,
        total_items,
        display_range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_items_fit_one_page() {
        let w = paginate(2, 10, 1);
        assert_eq!(w.effective_page, 1);
        assert_eq!(w.total_pages, 1);
        assert_eq!(w.display_range, (1, 2));
        assert_eq!((w.start, w.end), (0, 2));
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let w = paginate(25, 10, 99);
        assert_eq!(w.effective_page, 3);
        assert_eq!(w.total_pages, 3);
        assert_eq!(w.display_range, (21, 25));
        assert_eq!((w.start, w.end), (20, 25));
    }

    #[test]
    fn test_page_zero_clamps_to_first() {
        let w = paginate(25, 10, 0);
        assert_eq!(w.effective_page, 1);
        assert_eq!(w.display_range, (1, 10));
    }

    #[test]
    fn test_empty_collection() {
        let w = paginate(0, 10, 5);
        assert_eq!(w.total_pages, 1);
        assert_eq!(w.effective_page, 1);
        assert_eq!(w.display_range, (0, 0));
        assert!(!w.has_prev());
        assert!(!w.has_next());
    }

    #[test]
    fn test_effective_page_always_in_bounds() {
        for total in [0usize, 1, 9, 10, 11, 99, 100, 101] {
            for size in [1usize, 3, 10, 50] {
                for page in [0usize, 1, 2, 7, 1000, usize::MAX] {
                    let w = paginate(total, size, page);
                    assert!(w.effective_page >= 1);
                    assert!(w.effective_page <= w.total_pages);
                    assert!(w.end <= total);
                }
            }
        }
    }

    #[test]
    fn test_slice_returns_page_items() {
        let items: Vec<u32> = (1..=25).collect();
        let w = paginate(items.len(), 10, 3);
        assert_eq!(w.slice(&items), &[21, 22, 23, 24, 25]);
        assert!(w.has_prev());
        assert!(!w.has_next());
    }
}
