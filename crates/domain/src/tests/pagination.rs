// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::PageRequest;

#[test]
fn test_page_zero_is_first_page() {
    let page: PageRequest = PageRequest::new(0, 10);
    assert_eq!(page.page(), 1);
    assert_eq!(page.offset(), 0);
    assert_eq!(page.limit(), 10);
}

#[test]
fn test_offset_advances_by_page_size() {
    let page: PageRequest = PageRequest::new(3, 20);
    assert_eq!(page.offset(), 40);
}

#[test]
fn test_total_pages_rounds_up() {
    let page: PageRequest = PageRequest::new(1, 10);
    assert_eq!(page.total_pages(0), 0);
    assert_eq!(page.total_pages(10), 1);
    assert_eq!(page.total_pages(11), 2);
}
