macro_rules! visit_each_node {
    ($start:expr, $current:ident, $f:block) => {
        let mut cursor = $start.clone();

        while let Some($current) = cursor {
            // grab the next link before running the body; the body is
            // allowed to unlink $current, which takes its next link away
            let next = $current.borrow().next.clone();
            $f
            cursor = next;
        }
    };
}
