use rule_spec::{expr, Parameters};

fn main() -> Result<(), rule_spec::SpecError> {
    // Women with more than 3000 points or men with more than 6000 points
    let loyal_customers = expr::or_x([
        expr::and_x([expr::equals("gender", "F"), expr::more_than("points", 3000)])?,
        expr::and_x([expr::equals("gender", "M"), expr::more_than("points", 6000)])?,
    ])?;

    // Values bound through placeholders travel next to the rule
    let in_region = expr::and_x([
        expr::generic("country = :country", Parameters::from([("country", "CA")])),
        expr::not_in("province", ["QC", "ON"]),
        expr::func("like", ["city", "Van%"]),
    ])?;

    let specification = loyal_customers & in_region;

    println!("Rule: {}", rule_spec::render(&specification));
    for (name, value) in rule_spec::parameters(&specification).iter() {
        println!("Parameter: {name} = {value:?}");
    }

    Ok(())
}
