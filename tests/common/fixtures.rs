//! Static CSV corpora used across harnesses.

/// Header with the six recognized columns plus one pass-through column.
pub const HEADER: &str = "Account_Created,Last_Login,Transaction_date,Longitude,Latitude,Price,Name";

/// The canonical single-row input.
pub const SAMPLE_CSV: &str = "Account_Created,Last_Login,Transaction_date,Longitude,Latitude,Price,Name
1/2/15 3:04,1/2/15 3:04,1/2/15 3:04,10.5,20.25,\"1,000\",Alice
";

/// A few rows shaped like the real transaction export, columns in its order.
pub const CORPUS_TRANSACTIONS: &str = "Transaction_date,Product,Price,Payment_Type,Name,City,State,Country,Account_Created,Last_Login,Latitude,Longitude
1/2/09 6:17,Product1,\"1,200\",Mastercard,carolina,Basildon,England,United Kingdom,1/2/09 6:00,1/2/09 6:08,51.5,-1.1166667
1/2/09 4:53,Product1,\"1,200\",Visa,Betina,Parkville,MO,United States,1/2/09 4:42,1/2/09 7:49,39.195,-94.68194
1/2/09 13:08,Product1,\"1,200\",Mastercard,Federica e Andrea,Astoria,OR,United States,1/1/09 16:21,1/3/09 12:32,46.18806,-123.83
1/3/09 14:44,Product1,\"1,200\",Visa,Gouya,Echuca,Victoria,Australia,9/25/05 21:13,1/3/09 14:22,-36.1333333,144.75
1/4/09 12:56,Product2,\"3,600\",Visa,Gerd W ,Cahaba Heights,AL,United States,11/15/08 15:47,1/4/09 12:45,33.52056,-86.8025
";

/// Second row has a date in the wrong format.
pub const CSV_BAD_DATE_ROW_2: &str = "Account_Created,Last_Login,Transaction_date,Longitude,Latitude,Price,Name
1/2/15 3:04,1/2/15 3:04,1/2/15 3:04,10.5,20.25,100,first
2015-01-02 03:04,1/2/15 3:04,1/2/15 3:04,10.5,20.25,100,second
1/2/15 3:04,1/2/15 3:04,1/2/15 3:04,10.5,20.25,100,third
";

/// Header has no `Price` column at all.
pub const CSV_WITHOUT_PRICE: &str = "Account_Created,Last_Login,Transaction_date,Longitude,Latitude,Name
1/2/15 3:04,1/2/15 3:04,1/2/15 3:04,10.5,20.25,Alice
";

/// Last row stops after `Price`, leaving `Name` without a value.
pub const CSV_SHORT_TRAILING_ROW: &str = "Account_Created,Last_Login,Transaction_date,Longitude,Latitude,Price,Name
1/2/15 3:04,1/2/15 3:04,1/2/15 3:04,10.5,20.25,\"1,000\",Alice
1/2/15 3:04,1/2/15 3:04,1/2/15 3:04,10.5,20.25,\"2,000\"
";

/// Generate `n` well-formed rows under [`HEADER`]; row `i` has `Price == i`
/// and `Name == "user-{i}"`.
pub fn csv_with_rows(n: usize) -> String {
    let mut csv = String::from(HEADER);
    csv.push('\n');
    for i in 0..n {
        let yy = i % 100;
        csv.push_str(&format!(
            "{m}/{d}/{yy:02} {h}:{min:02},1/1/00 0:00,12/31/99 23:59,{lon},{lat},\"{price}\",user-{i}\n",
            m = i % 12 + 1,
            d = i % 28 + 1,
            h = i % 24,
            min = i % 60,
            lon = -(i as f64) / 8.0,
            lat = (i as f64) / 4.0,
            price = group_thousands(i as u64),
        ));
    }
    csv
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
