use sorted_dlist::SortedList;

fn main() {
    let mut list: SortedList = vec![5, 1, 3, 2, 2, 8].into_iter().collect();
    println!("after inserts:      {}", list);

    println!("value at index 1:   {}", list.get_value(1).unwrap_or(-1));
    match list.search_value(2) {
        Some(index) => println!("first 2 sits at:    {}", index),
        None => println!("no 2 in the list"),
    }

    list.remove_all(2);
    println!("without the 2s:     {}", list);

    list.insert(4);
    list.insert(7);
    println!("with 4 and 7:       {}", list);

    if let Err(err) = list.filter_n_max(3) {
        eprintln!("filter failed: {}", err);
    }
    println!("three largest:      {}", list);

    list.filter_odd();
    println!("odd values only:    {}", list);
}
